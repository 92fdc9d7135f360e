use super::*;

#[test]
fn file_name_follows_made_in_pattern() {
    assert_eq!(
        export_file_name("g", 1_700_000_000_123, "svg"),
        "made-in-g-1700000000123.svg"
    );
    let name = timestamped_file_name("a", "png");
    assert!(name.starts_with("made-in-a-"));
    assert!(name.ends_with(".png"));
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let root = std::env::temp_dir().join(format!("glyphwarp_export_dirs_{}", std::process::id()));
    let file = root.join("x").join("y").join("out.svg");
    ensure_parent_dir(&file).unwrap();
    assert!(root.join("x").join("y").is_dir());
    let _ = std::fs::remove_dir_all(&root);
}
