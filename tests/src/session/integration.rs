//! Whole sessions over scripted input, checked against the exact text a user
//! would see on stdout.

use crate::util::{listing, run_bytes, run_script, GOODBYE, MENU};

#[tokio::test]
async fn list_then_exit_transcript() {
    let transcript = run_script("2\n4\n").await.unwrap();

    let expected = [
        MENU,
        listing(&[("Alice", "E101"), ("Bob", "E102")]).as_str(),
        MENU,
        GOODBYE,
    ]
    .concat();
    assert_eq!(transcript.output, expected);
}

#[tokio::test]
async fn add_transcript() {
    let transcript = run_script("1\nDave\ne201\n4\n").await.unwrap();

    let expected = [
        MENU,
        "Enter employee name: ",
        "Enter employee ID: ",
        "\nEmployee Dave (ID: E201) added successfully.\n",
        MENU,
        GOODBYE,
    ]
    .concat();
    assert_eq!(transcript.output, expected);
    assert_eq!(transcript.ids(), vec!["E101", "E102", "E201"]);
}

#[tokio::test]
async fn remove_transcript() {
    let transcript = run_script("3\ne102\n2\n4\n").await.unwrap();

    let expected = [
        MENU,
        "Enter employee ID to remove: ",
        "\nEmployee Bob (ID: E102) removed successfully.\n",
        MENU,
        listing(&[("Alice", "E101")]).as_str(),
        MENU,
        GOODBYE,
    ]
    .concat();
    assert_eq!(transcript.output, expected);
}

#[tokio::test]
async fn invalid_choice_transcript() {
    let transcript = run_script("9\n4\n").await.unwrap();

    let expected = [
        MENU,
        "\nInvalid choice: 9. Please enter a number from 1 to 4.\n",
        MENU,
        GOODBYE,
    ]
    .concat();
    assert_eq!(transcript.output, expected);
}

#[tokio::test]
async fn windows_line_endings_are_accepted() {
    let transcript = run_script("1\r\nErin\r\ne7\r\n4\r\n").await.unwrap();

    assert!(transcript
        .output
        .contains("\nEmployee Erin (ID: E7) added successfully.\n"));
    assert_eq!(transcript.ids(), vec!["E101", "E102", "E7"]);
}

#[tokio::test]
async fn listing_after_removing_everyone() {
    let transcript = run_script("3\nE101\n3\nE102\n2\n4\n").await.unwrap();

    assert!(transcript.output.contains(&listing(&[])));
    assert!(transcript.employees.is_empty());
}

#[tokio::test]
async fn end_of_input_ends_quietly() {
    let transcript = run_script("2\n").await.unwrap();

    assert!(transcript.output.ends_with(MENU));
    assert!(!transcript.output.contains(GOODBYE));
    assert_eq!(transcript.ids(), vec!["E101", "E102"]);
}

#[tokio::test]
async fn end_of_input_on_empty_stdin() {
    let transcript = run_script("").await.unwrap();

    assert_eq!(transcript.output, MENU);
}

#[tokio::test]
async fn nothing_is_read_after_exit() {
    let transcript = run_script("4\n1\nGhost\nG1\n").await.unwrap();

    assert_eq!(transcript.output, [MENU, GOODBYE].concat());
    assert_eq!(transcript.ids(), vec!["E101", "E102"]);
}

#[tokio::test]
async fn invalid_utf8_input_does_not_end_session() {
    let transcript = run_bytes(b"1\nJos\xe9\nE300\n2\n4\n").await.unwrap();

    assert!(transcript.output.ends_with(GOODBYE));
    assert!(transcript
        .output
        .contains("3. Name: Jos\u{FFFD}, ID: E300\n"));
    assert_eq!(transcript.ids(), vec!["E101", "E102", "E300"]);
}
