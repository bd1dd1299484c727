use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const NITROGEN: &str = "\
N2
  handmade

  2  1  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0
    1.1000    0.0000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  3  0  0  0  0
M  END
$$$$
";

const METHANOL: &str = "\
methanol
  handmade

  6  5  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.4300    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
   -0.3600    1.0300    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.3600   -0.5100    0.8900 H   0  0  0  0  0  0  0  0  0  0  0  0
   -0.3600   -0.5100   -0.8900 H   0  0  0  0  0  0  0  0  0  0  0  0
    1.7500    0.9100    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  1  3  1  0  0  0  0
  1  4  1  0  0  0  0
  1  5  1  0  0  0  0
  2  6  1  0  0  0  0
M  END
$$$$
";

fn atomdesc(args: &[&Path], extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_atomdesc"))
        .args(args)
        .args(extra)
        .arg("-q")
        .output()
        .expect("failed to launch atomdesc")
}

#[test]
fn missing_positionals_exit_with_status_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_atomdesc"))
        .arg("only-input.sdf")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn help_exits_successfully() {
    let output = Command::new(env!("CARGO_BIN_EXE_atomdesc"))
        .arg("--help")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("OUTPUT_CSV"));
}

#[test]
fn full_run_writes_both_outputs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.sdf");
    let out_sdf = dir.path().join("out.sdf");
    let out_csv = dir.path().join("out.csv");
    fs::write(&input, format!("{}{}", NITROGEN, METHANOL)).unwrap();

    let output = atomdesc(&[&input, &out_sdf, &out_csv], &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let csv = fs::read_to_string(&out_csv).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert!(lines[0].starts_with(
        "Title,Index,Symbol,AtomType,longestMaxTopDistInMolecule,highestMaxTopDistInMatrixRow,diffSPAN3,relSPAN4,"
    ));
    assert_eq!(lines.len(), 1 + 2 + 2);
    assert!(lines[1].starts_with("N2,0,N,N.1,1,1,0,1.0,"));
    assert!(lines[3].starts_with("methanol,0,C,C.3,"));
    assert!(lines[4].starts_with("methanol,1,O,O.3,"));

    let sdf = fs::read_to_string(&out_sdf).unwrap();
    assert_eq!(sdf.matches("$$$$").count(), 2);
    assert!(sdf.contains("> <longestMaxTopInMolecule>"));
    assert!(sdf.contains("> <AtomDegree>"));
}

#[test]
fn descriptor_selection_controls_columns() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.sdf");
    let out_sdf = dir.path().join("out.sdf");
    let out_csv = dir.path().join("out.csv");
    fs::write(&input, NITROGEN).unwrap();

    let output = atomdesc(&[&input, &out_sdf, &out_csv], &["-d", "AtomValance,AtomDegree"]);
    assert!(output.status.success());

    let csv = fs::read_to_string(&out_csv).unwrap();
    assert!(csv.lines().next().unwrap().ends_with(",relSPAN4,AtomValance,AtomDegree"));
}

#[test]
fn unknown_descriptor_fails_before_writing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.sdf");
    let out_sdf = dir.path().join("out.sdf");
    let out_csv = dir.path().join("out.csv");
    fs::write(&input, NITROGEN).unwrap();

    let output = atomdesc(&[&input, &out_sdf, &out_csv], &["-d", "Bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Bogus"));
    assert!(!out_csv.exists());
    assert!(!out_sdf.exists());
}

#[test]
fn malformed_input_reports_line_and_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.sdf");
    let out_sdf = dir.path().join("out.sdf");
    let out_csv = dir.path().join("out.csv");
    fs::write(&input, "broken\n\n\n  x  y\n").unwrap();

    let output = atomdesc(&[&input, &out_sdf, &out_csv], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 4"));
    assert!(!out_csv.exists());
}
