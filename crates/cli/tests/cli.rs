use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("fdistctl").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("force-fst"))
        .stdout(predicate::str::contains("datacal"))
        .stdout(predicate::str::contains("cplot"));
}

#[test]
fn test_fdist_requires_parameters() {
    let mut cmd = Command::cargo_bin("fdistctl").unwrap();
    cmd.arg("fdist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--npops"));
}

#[test]
fn test_fdist_rejects_unknown_mutation_model() {
    let mut cmd = Command::cargo_bin("fdistctl").unwrap();
    cmd.args([
        "fdist", "--npops", "100", "--nsamples", "15", "--fst", "0.05", "--sample-size", "25",
        "--mutation", "jukes-cantor",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown mutation model"));
}

#[test]
fn test_datacal_fails_cleanly_without_binaries() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("fdistctl").unwrap();
    cmd.arg("datacal")
        .arg("--fdist-dir")
        .arg(temp.path())
        .arg("--data-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("datacal"));
}

#[cfg(unix)]
mod with_stub_suite {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn install_stub(dir: &Path, tool: &str, script: &str) {
        let path = dir.join(tool);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_datacal_prints_summary() {
        let bin = tempdir().unwrap();
        let data = tempdir().unwrap();
        install_stub(
            bin.path(),
            "datacal",
            "#!/bin/sh\n\
             cat > /dev/null\n\
             echo 'overall observed mean Fst 0.0851'\n\
             echo 'expected total number of alleles per locus in sample 30'\n",
        );

        let mut cmd = Command::cargo_bin("fdistctl").unwrap();
        cmd.arg("datacal")
            .arg("--fdist-dir")
            .arg(bin.path())
            .arg("--data-dir")
            .arg(data.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Observed Fst: 0.0851"))
            .stdout(predicate::str::contains("sample size: 30"));
    }

    #[test]
    fn test_fdist_reports_average_fst() {
        let bin = tempdir().unwrap();
        let data = tempdir().unwrap();
        install_stub(
            bin.path(),
            "fdist2",
            "#!/bin/sh\ncat > /dev/null\necho 'average Fst = 0.0467'\n",
        );

        let mut cmd = Command::cargo_bin("fdistctl").unwrap();
        cmd.args(["fdist", "--npops", "100", "--nsamples", "15"])
            .args(["--fst", "0.05", "--sample-size", "25", "--num-sims", "500"])
            .arg("--fdist-dir")
            .arg(bin.path())
            .arg("--data-dir")
            .arg(data.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Observed average Fst: 0.0467"));
    }

    #[test]
    fn test_force_fst_converges_with_echo_simulator() {
        let bin = tempdir().unwrap();
        let data = tempdir().unwrap();
        // Echoes back the requested Fst, so the search converges on the
        // first probe.
        install_stub(
            bin.path(),
            "fdist2",
            "#!/bin/sh\n\
             cat > /dev/null\n\
             fst=$(sed -n 3p fdist_params2.dat)\n\
             echo \"average Fst = $fst\"\n",
        );

        let mut cmd = Command::cargo_bin("fdistctl").unwrap();
        cmd.args(["force-fst", "--npops", "100", "--nsamples", "15"])
            .args(["--fst", "0.05", "--sample-size", "25"])
            .args(["--num-sims", "500", "--try-runs", "100"])
            .arg("--fdist-dir")
            .arg(bin.path())
            .arg("--data-dir")
            .arg(data.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Observed average Fst: 0.05"));
    }

    #[test]
    fn test_cplot_writes_csv() {
        let bin = tempdir().unwrap();
        let data = tempdir().unwrap();
        install_stub(
            bin.path(),
            "cplot",
            "#!/bin/sh\n\
             cat > /dev/null\n\
             printf '0.0125 0.0031 0.2210\\n' > out.cpl\n",
        );

        let csv_path = data.path().join("intervals.csv");
        let mut cmd = Command::cargo_bin("fdistctl").unwrap();
        cmd.arg("cplot")
            .arg("--output")
            .arg(&csv_path)
            .arg("--fdist-dir")
            .arg(bin.path())
            .arg("--data-dir")
            .arg(data.path())
            .assert()
            .success();

        let csv = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(csv, "0.0125,0.0031,0.221\n");
    }
}
