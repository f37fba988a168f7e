//! Whole-tree behavior: size accounting, handle reuse, path round-trips.

use memsh_kernel::{NodeKind, Tree, WriteMode};
use memsh_types::{Principal, ShellError};

fn tree_with_nested_files() -> Tree {
    let mut tree = Tree::new();
    let root = tree.root();
    let docs = tree.create_dir(root, "docs", Principal::Casual).unwrap();
    let work = tree.create_dir(docs, "work", Principal::Casual).unwrap();
    let a = tree.create_file(work, "a.txt", Principal::Casual).unwrap();
    let b = tree.create_file(docs, "b.txt", Principal::Casual).unwrap();
    tree.write(a, WriteMode::Overwrite, b"0123456789", Principal::Casual)
        .unwrap();
    tree.write(b, WriteMode::Overwrite, b"12345", Principal::Casual)
        .unwrap();
    tree
}

#[test]
fn sizes_aggregate_up_every_ancestor() {
    let tree = tree_with_nested_files();
    let docs = tree.resolve("/docs").unwrap();
    let work = tree.resolve("/docs/work").unwrap();
    assert_eq!(tree.node(work).subtree_size(), 10);
    assert_eq!(tree.node(docs).subtree_size(), 15);
    assert_eq!(tree.node(tree.root()).subtree_size(), 15);
}

#[test]
fn delete_subtracts_subtree_from_every_ancestor() {
    let mut tree = tree_with_nested_files();
    let work = tree.resolve("/docs/work").unwrap();
    tree.remove(work, Principal::Casual).unwrap();

    let docs = tree.resolve("/docs").unwrap();
    assert_eq!(tree.node(docs).subtree_size(), 5);
    assert_eq!(tree.node(tree.root()).subtree_size(), 5);
    assert!(tree.resolve("/docs/work").is_none());
    assert!(tree.resolve("/docs/work/a.txt").is_none());
}

#[test]
fn move_shifts_sizes_between_branches() {
    let mut tree = tree_with_nested_files();
    let root = tree.root();
    let archive = tree.create_dir(root, "archive", Principal::Casual).unwrap();
    let work = tree.resolve("/docs/work").unwrap();
    tree.move_entry(work, archive).unwrap();

    let docs = tree.resolve("/docs").unwrap();
    assert_eq!(tree.node(docs).subtree_size(), 5);
    assert_eq!(tree.node(archive).subtree_size(), 10);
    assert_eq!(tree.node(root).subtree_size(), 15);
    assert!(tree.resolve("/archive/work/a.txt").is_some());
    assert!(tree.resolve("/docs/work").is_none());
}

#[test]
fn move_into_own_subtree_is_rejected() {
    let mut tree = tree_with_nested_files();
    let docs = tree.resolve("/docs").unwrap();
    let work = tree.resolve("/docs/work").unwrap();
    assert_eq!(tree.move_entry(docs, work), Err(ShellError::InvalidArguments));
    assert_eq!(tree.move_entry(docs, docs), Err(ShellError::InvalidArguments));
    // nothing moved, sizes intact
    assert_eq!(tree.node(tree.root()).subtree_size(), 15);
}

#[test]
fn failed_move_keeps_source_attached() {
    let mut tree = tree_with_nested_files();
    let root = tree.root();
    let dest = tree.create_dir(root, "dest", Principal::Casual).unwrap();
    let dest_b = tree.create_file(dest, "b.txt", Principal::Casual).unwrap();
    tree.write(dest_b, WriteMode::Overwrite, b"xyz", Principal::Casual)
        .unwrap();

    let b = tree.resolve("/docs/b.txt").unwrap();
    assert_eq!(tree.move_entry(b, dest), Err(ShellError::AlreadyExists));

    let docs = tree.resolve("/docs").unwrap();
    assert_eq!(tree.node(b).parent(), Some(docs));
    assert_eq!(tree.node(docs).subtree_size(), 15);
    assert_eq!(tree.node(dest).subtree_size(), 3);
}

#[test]
fn freed_slots_are_reused_and_old_handles_die() {
    let mut tree = tree_with_nested_files();
    let before = tree.len();
    let b = tree.resolve("/docs/b.txt").unwrap();
    tree.remove(b, Principal::Casual).unwrap();
    assert!(!tree.is_live(b));

    let root = tree.root();
    let fresh = tree.create_file(root, "c.txt", Principal::Casual).unwrap();
    assert_eq!(tree.len(), before);
    assert_eq!(fresh.index(), b.index());
    assert!(tree.is_live(fresh));
    assert_eq!(tree.node(fresh).kind(), NodeKind::File);
}

#[test]
fn absolute_paths_round_trip() {
    let tree = tree_with_nested_files();
    for path in ["/", "/docs", "/docs/work", "/docs/work/a.txt"] {
        let id = tree.resolve(path).unwrap();
        assert_eq!(tree.absolute_path(id), path);
    }
}

#[test]
fn append_grows_sizes_and_overwrite_shrinks_them() {
    let mut tree = tree_with_nested_files();
    let a = tree.resolve("/docs/work/a.txt").unwrap();
    tree.write(a, WriteMode::Append, b"...", Principal::Casual)
        .unwrap();
    assert_eq!(tree.node(tree.root()).subtree_size(), 18);

    tree.write(a, WriteMode::Overwrite, b"x", Principal::Casual)
        .unwrap();
    assert_eq!(tree.node(tree.root()).subtree_size(), 6);
    let work = tree.resolve("/docs/work").unwrap();
    assert_eq!(tree.node(work).subtree_size(), 1);
}

#[test]
fn superuser_branch_is_opaque_to_casual() {
    let mut tree = Tree::new();
    let root = tree.root();
    let vault = tree.create_dir(root, "vault", Principal::Superuser).unwrap();

    assert_eq!(
        tree.create_file(vault, "s.txt", Principal::Casual),
        Err(ShellError::PermissionDenied)
    );
    assert_eq!(
        tree.remove(vault, Principal::Casual),
        Err(ShellError::PermissionDenied)
    );
    let secret = tree.create_file(vault, "s.txt", Principal::Superuser).unwrap();
    assert_eq!(
        tree.read(secret, Principal::Casual),
        Err(ShellError::PermissionDenied)
    );
    assert!(tree.read(secret, Principal::Superuser).is_ok());
}

#[test]
fn directories_under_superuser_parent_escalate_but_files_do_not() {
    let mut tree = Tree::new();
    let root = tree.root();
    let vault = tree.create_dir(root, "vault", Principal::Superuser).unwrap();

    let inner = tree.create_dir(vault, "inner", Principal::Superuser).unwrap();
    assert_eq!(tree.node(inner).creator(), Principal::Superuser);

    // a Superuser actor creating a file keeps its own principal
    let note = tree.create_file(vault, "note", Principal::Superuser).unwrap();
    assert_eq!(tree.node(note).creator(), Principal::Superuser);

    // under a Casual parent nothing escalates
    let open = tree.create_dir(root, "open", Principal::Casual).unwrap();
    let sub = tree.create_dir(open, "sub", Principal::Casual).unwrap();
    assert_eq!(tree.node(sub).creator(), Principal::Casual);
}

#[test]
fn recompute_sizes_reports_clean_tree() {
    let mut tree = tree_with_nested_files();
    assert!(!tree.recompute_sizes());
}
