use std::process::{Command, Output};

static BINARY_PATH: &'static str = env!("CARGO_BIN_EXE_httpcode");

static MDN: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status";

fn run(args: &[&str]) -> Result<Output, anyhow::Error> {
    let output = Command::new(BINARY_PATH)
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// The codes printed at the start of each line.
fn codes(output: &Output) -> Vec<u16> {
    stdout(output)
        .lines()
        .map(|line| {
            line.split_whitespace()
                .next()
                .expect("empty line")
                .parse()
                .expect("line does not start with a code")
        })
        .collect()
}

#[test]
fn no_arguments_lists_everything() {
    let output = run(&[]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));

    let codes = codes(&output);
    assert_eq!(codes.len(), 62);
    assert_eq!(codes.first(), Some(&100));
    assert_eq!(codes.last(), Some(&511));
    assert!(codes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn single_code() {
    let output = run(&["404"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "404  Not Found\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn columns_are_aligned() {
    let output = run(&["200", "teapot"]).expect("could not run binary");
    assert_eq!(stdout(&output), "200  OK\n418  I'm a teapot\n");
}

#[test]
fn mdn_links() {
    let output = run(&["-m", "200", "404"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!(
            "200  OK         {mdn}/200\n404  Not Found  {mdn}/404\n",
            mdn = MDN
        )
    );
}

#[test]
fn long_mdn_flag() {
    let output = run(&["--mdn", "418"]).expect("could not run binary");
    assert_eq!(stdout(&output), format!("418  I'm a teapot  {}/418\n", MDN));
}

#[test]
fn pattern() {
    let output = run(&["40_"]).expect("could not run binary");
    assert_eq!(
        codes(&output),
        [400, 401, 402, 403, 404, 405, 406, 407, 408, 409]
    );
}

#[test]
fn results_are_merged_and_sorted() {
    let output = run(&["5*", "teapot", "200", "200", "2*"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));

    let codes = codes(&output);
    assert!(codes.windows(2).all(|w| w[0] < w[1]));
    assert!(codes.contains(&200));
    assert!(codes.contains(&418));
    assert!(codes.contains(&511));
}

#[test]
fn unmatched_term_sets_exit_status() {
    let output = run(&["200", "9999"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "200  OK\n");
}

#[test]
fn every_unmatched_term_counts() {
    let output = run(&["bogus", "9999", "7*"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn flags_stop_at_first_term() {
    // `-m` comes after a term, so it is a term itself and matches nothing
    let output = run(&["404", "-m"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "404  Not Found\n");
}

#[test]
fn double_dash_ends_options() {
    let output = run(&["--", "-404"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn help() {
    let output = run(&["-h"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Usage of "));
    assert!(stderr.contains("[code|text|pattern]..."));
    assert!(stderr.contains("--mdn"));
}

#[test]
fn invalid_flag() {
    let output = run(&["-x"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage of "));
}

#[test]
fn single_dash_help() {
    let output = run(&["-help"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Usage of "));
}

#[test]
fn mdn_flag_with_value() {
    let output = run(&["-m=true", "404"]).expect("could not run binary");
    assert_eq!(stdout(&output), format!("404  Not Found  {}/404\n", MDN));

    let output = run(&["-m=false", "404"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "404  Not Found\n");
}

#[test]
fn caret_negates_class() {
    let output = run(&["[^4]0_"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    let codes = codes(&output);
    assert!(codes.contains(&100));
    assert!(codes.contains(&500));
    assert!(codes.iter().all(|code| code / 100 != 4 && code / 10 % 10 == 0));
}

#[test]
fn escaped_digit() {
    let output = run(&["\\4*"]).expect("could not run binary");
    assert_eq!(output.status.code(), Some(0));
    assert!(codes(&output).iter().all(|code| code / 100 == 4));
    assert!(codes(&output).contains(&418));
}
