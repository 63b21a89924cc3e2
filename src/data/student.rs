use crate::error::{ParseYearSnafu, RollcallResult};
use maud::{Markup, Render, html};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt::{Display, Formatter};

/// Options offered by the department select.
pub const DEPARTMENTS: [&str; 6] = [
    "Computer Science",
    "Information Technology",
    "Electronics",
    "Electrical",
    "Mechanical",
    "Civil",
];

/// Options offered by the year select.
pub const YEARS: [i32; 4] = [1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roll_number: String,
    pub department: String,
    pub year: i32,
}

impl Student {
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn year_label(&self) -> String {
        year_label(self.year)
    }
}

impl Render for Student {
    fn render(&self) -> Markup {
        html! {
            (self.first_name) " " (self.last_name)
        }
    }
}

pub fn year_label(year: i32) -> String {
    match year {
        1 => "1st Year".to_string(),
        2 => "2nd Year".to_string(),
        3 => "3rd Year".to_string(),
        4 => "4th Year".to_string(),
        n => format!("{n}th Year"),
    }
}

/// What gets sent to the students service when adding or updating - everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roll_number: String,
    pub department: String,
    pub year: i32,
}

/// Raw values of the add/edit form, exactly as typed. Fields the browser leaves out are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roll_number: String,
    pub department: String,
    pub year: String,
}

impl StudentForm {
    pub fn to_payload(&self) -> RollcallResult<StudentPayload> {
        let year = self.year.trim();

        Ok(StudentPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            department: self.department.trim().to_string(),
            year: year.parse().context(ParseYearSnafu { original: year })?,
        })
    }
}

impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            roll_number: student.roll_number.clone(),
            department: student.department.clone(),
            year: student.year.to_string(),
        }
    }
}
