//! Script-level tests: whole sessions run through the REPL surface.

use memsh_kernel::{ScriptedConfirm, Session};
use memsh_repl::{LineOutcome, Repl};

/// Run each line through one REPL and collect whatever would print.
fn run_script(script: &str) -> Vec<String> {
    let mut repl = Repl::with_session(Session::new());
    let mut outputs = Vec::new();
    for line in script.lines() {
        match repl.process_line(line) {
            LineOutcome::Output(text) => outputs.push(text),
            LineOutcome::Quiet => {}
            LineOutcome::Exit => break,
        }
    }
    outputs
}

fn outputs_contain(outputs: &[String], expected: &[&str]) -> bool {
    let joined = outputs.join("\n");
    expected.iter().all(|e| joined.contains(e))
}

#[test]
fn create_write_print_session() {
    let outputs = run_script(
        "mkdir docs\n\
         cd docs\n\
         touch notes.txt\n\
         insert > notes.txt #remember the milk\n\
         print! notes.txt",
    );
    assert!(outputs_contain(&outputs, &["remember the milk"]));
}

#[test]
fn ls_shows_marker_size_and_owner() {
    let outputs = run_script(
        "mkdir docs\n\
         touch a.txt\n\
         insert > a.txt #12345\n\
         ls",
    );
    assert!(outputs_contain(&outputs, &[">docs 0 Casual", "-a.txt 5 Casual"]));
}

#[test]
fn errors_surface_as_single_lines() {
    let outputs = run_script(
        "frobnicate\n\
         cd nowhere\n\
         mkdir docs\n\
         mkdir docs",
    );
    assert!(outputs_contain(
        &outputs,
        &[
            "Sorry, your command is invalid!",
            "File/Directory could not be found!",
            "File/Directory already exists!",
        ],
    ));
}

#[test]
fn bad_usage_shows_the_usage_line() {
    let outputs = run_script("mkdir one two");
    assert!(outputs_contain(
        &outputs,
        &[
            "Bad Usage! The right way is: mkdir dirName",
            "Sorry, your arguments are invalid!",
        ],
    ));
}

#[test]
fn exit_stops_the_script() {
    let outputs = run_script(
        "mkdir docs\n\
         exit\n\
         ls",
    );
    // nothing after exit runs, and ls would have printed the directory
    assert!(!outputs_contain(&outputs, &[">docs"]));
}

#[test]
fn prompt_follows_the_current_directory() {
    let mut repl = Repl::with_session(Session::new());
    assert_eq!(repl.prompt(), "/$ ");
    repl.process_line("mkdir docs");
    repl.process_line("cd docs");
    assert_eq!(repl.prompt(), "/docs$ ");
    repl.process_line("cd ..");
    assert_eq!(repl.prompt(), "/$ ");
}

#[test]
fn scripted_confirmation_drives_rm() {
    let mut session = Session::new();
    session.set_confirm_source(Box::new(ScriptedConfirm::new(["yes"])));
    let mut repl = Repl::with_session(session);
    repl.process_line("touch junk");
    assert_eq!(repl.process_line("rm junk"), LineOutcome::Quiet);
    match repl.process_line("print! junk") {
        LineOutcome::Output(text) => assert!(text.contains("could not be found")),
        other => panic!("expected an error line, got {other:?}"),
    }
}

#[test]
fn switch_flow_updates_uprint() {
    let outputs = run_script(
        "uprint\n\
         switch superuser\n\
         uprint\n\
         switch\n\
         uprint",
    );
    assert_eq!(outputs, vec!["Casual", "Superuser", "Casual"]);
}

#[test]
fn permission_errors_reach_the_user() {
    let outputs = run_script(
        "switch superuser\n\
         mkdir vault\n\
         switch\n\
         cd vault",
    );
    assert!(outputs_contain(&outputs, &["Permission denied!"]));
}
