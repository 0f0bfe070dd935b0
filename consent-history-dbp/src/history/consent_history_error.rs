/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Consent history service errors.

use std::error::Error;
use std::fmt;

/// Cause of error.
#[derive(Debug)]
pub enum ConsentHistoryErrorKind {
    /// No history exists for the requested key. An expected outcome of a
    /// lookup, not a defect.
    NotFound,
    /// The caller omitted a required request identifier.
    BadRequest,
    /// The backend scan failed or a stored record could not be decoded.
    Infrastructure,
    /// The request addressed a resource or operation this service does not
    /// implement.
    Unsupported,
}

impl ConsentHistoryErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg<S: AsRef<str>>(self, msg: S) -> ConsentHistoryError {
        ConsentHistoryError {
            kind: self,
            msg: Some(msg.as_ref().to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> ConsentHistoryError {
        ConsentHistoryError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for ConsentHistoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/** Consent history service error.

Create a new instance via [ConsentHistoryErrorKind].
*/
#[derive(Debug)]
pub struct ConsentHistoryError {
    kind: ConsentHistoryErrorKind,
    msg: Option<String>,
}

impl ConsentHistoryError {
    /// Return the type of error.
    pub fn kind(&self) -> &ConsentHistoryErrorKind {
        &self.kind
    }

    /// Return the error message, if any.
    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}

impl fmt::Display for ConsentHistoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{msg}")
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl AsRef<ConsentHistoryError> for ConsentHistoryError {
    fn as_ref(&self) -> &ConsentHistoryError {
        self
    }
}

impl Error for ConsentHistoryError {}
