//! print! — Print a file's content.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Print tool: output a file's raw content.
pub struct Print;

impl Tool for Print {
    fn name(&self) -> &str {
        "print!"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("print!", "Print a file's content", "print! fileName")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [name] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.read_file(name) {
            Ok(bytes) => ExecResult::success(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) => ExecResult::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::ops::WriteMode;
    use memsh_types::ShellError;

    fn invoke(name: &str) -> Invocation {
        Invocation {
            args: vec![name.to_string()],
            raw: format!("print! {name}"),
        }
    }

    #[test]
    fn prints_written_content() {
        let mut session = Session::new();
        session.make_file("a.txt").unwrap();
        session
            .write_file("a.txt", WriteMode::Overwrite, b"hello")
            .unwrap();
        let result = Print.execute(&invoke("a.txt"), &mut session);
        assert!(result.ok());
        assert_eq!(result.out, "hello");
    }

    #[test]
    fn empty_file_prints_nothing() {
        let mut session = Session::new();
        session.make_file("a.txt").unwrap();
        let result = Print.execute(&invoke("a.txt"), &mut session);
        assert!(result.ok());
        assert!(result.out.is_empty());
    }

    #[test]
    fn missing_file_not_found() {
        let mut session = Session::new();
        let result = Print.execute(&invoke("ghost"), &mut session);
        assert_eq!(result.status, Some(ShellError::NotFound));
    }

    #[test]
    fn directory_not_a_file() {
        let mut session = Session::new();
        session.make_dir("docs").unwrap();
        let result = Print.execute(&invoke("docs"), &mut session);
        assert_eq!(result.status, Some(ShellError::NotAFile));
    }
}
