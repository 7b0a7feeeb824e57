// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Display, Formatter};

/// The ordered failure messages recorded against a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    field: String,
    messages: Vec<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            messages: vec![message.into()],
        }
    }

    pub fn with_messages(field: impl Into<String>, messages: Vec<String>) -> FieldError {
        FieldError {
            field: field.into(),
            messages,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let FieldError { field, messages } = self;
        if field.is_empty() {
            write!(f, "{}", messages.join(", "))
        } else {
            write!(f, "{}: {}", field, messages.join(", "))
        }
    }
}

/// A validation failure carrying an ordered sequence of per-field messages
/// that share one error code.
///
/// Merging two validation errors keeps the left-hand code and concatenates
/// the field lists in left-then-right order; no field is ever dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    code: String,
    fields: Vec<FieldError>,
}

impl ValidationError {
    /// The code used when a validation error is created without an explicit
    /// one.
    pub const DEFAULT_CODE: &'static str = "validation";

    pub fn new(code: impl Into<String>) -> ValidationError {
        ValidationError {
            code: code.into(),
            fields: vec![],
        }
    }

    /// A single-field validation error with the default code.
    pub fn of(field: impl Into<String>, message: impl Into<String>) -> ValidationError {
        ValidationError {
            code: Self::DEFAULT_CODE.to_string(),
            fields: vec![FieldError::new(field, message)],
        }
    }

    pub fn with_field(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> ValidationError {
        self.fields.push(FieldError::new(field, message));
        self
    }

    pub fn push(&mut self, field_error: FieldError) {
        self.fields.push(field_error);
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Merges another validation error into this one, keeping this error's
    /// code and appending the other's fields after this error's fields.
    pub fn merge(mut self, right: ValidationError) -> ValidationError {
        self.fields.extend(right.fields);
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ValidationError { code, fields } = self;
        write!(f, "Validation failed ({})", code)?;
        let mut sep = ": ";
        for field in fields {
            write!(f, "{}{}", sep, field)?;
            sep = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
