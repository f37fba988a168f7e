//! mkdir — Create a directory in the current directory.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Mkdir tool: create a directory.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create a directory", "mkdir dirName")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [name] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.make_dir(name) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memsh_types::ShellError;

    fn invoke(args: &[&str]) -> Invocation {
        Invocation {
            args: args.iter().map(|s| s.to_string()).collect(),
            raw: format!("mkdir {}", args.join(" ")),
        }
    }

    #[test]
    fn creates_directory() {
        let mut session = Session::new();
        let result = Mkdir.execute(&invoke(&["docs"]), &mut session);
        assert!(result.ok());
        let id = session.tree().resolve("/docs").unwrap();
        assert!(session.tree().node(id).is_dir());
    }

    #[test]
    fn duplicate_already_exists() {
        let mut session = Session::new();
        Mkdir.execute(&invoke(&["docs"]), &mut session);
        let result = Mkdir.execute(&invoke(&["docs"]), &mut session);
        assert_eq!(result.status, Some(ShellError::AlreadyExists));
    }

    #[test]
    fn illegal_character_creates_nothing() {
        let mut session = Session::new();
        let result = Mkdir.execute(&invoke(&["foo$bar"]), &mut session);
        assert_eq!(result.status, Some(ShellError::IllegalCharacter));
        assert!(session.tree().node(session.cwd()).children().is_empty());
    }

    #[test]
    fn wrong_arity_is_bad_usage() {
        let mut session = Session::new();
        let result = Mkdir.execute(&invoke(&[]), &mut session);
        assert_eq!(result.status, Some(ShellError::InvalidArguments));
        assert!(result.out.contains("mkdir dirName"));
        let result = Mkdir.execute(&invoke(&["a", "b"]), &mut session);
        assert_eq!(result.status, Some(ShellError::InvalidArguments));
    }
}
