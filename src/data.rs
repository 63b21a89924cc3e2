use crate::data::student::StudentId;
use serde::Deserialize;

pub mod student;

#[derive(Deserialize)]
pub struct IdPath {
    pub id: StudentId,
}

#[derive(Deserialize, Default)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}
