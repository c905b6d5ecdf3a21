use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use kira_calorimetry::io::StagedOutputs;
use kira_calorimetry::io::allowlist::write_allowlist;
use kira_calorimetry::io::tsv_writer::{write_metadata, write_timeseries};
use kira_calorimetry::schema::v1::{MouseMetadataRow, TimeSeriesRow};
use tempfile::TempDir;

fn meta() -> MouseMetadataRow {
    MouseMetadataRow {
        id: "M1".into(),
        strain: "B6-Cre/+".into(),
        birthdate: NaiveDate::from_ymd_opt(2022, 11, 2).unwrap(),
        start_body_weight: Some(25.3),
        end_body_weight: None,
        ambient_temperature: Some(22.0),
        experiment_id: "E1".into(),
        start_timestamp: "2023-03-01 10:00:00".into(),
        end_timestamp: "2023-03-04 10:00:00".into(),
        genotype: "QB_hetero".into(),
    }
}

#[test]
fn metadata_tsv_format() {
    let mut buf = Vec::new();
    write_metadata(&mut buf, &[meta()]).unwrap();
    let content = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "id\tstrain\tbirthdate\tstartBodyWeight\tendBodyWeight\tambientTemperature\texperimentId\tstartTimestamp\tendTimestamp\tgenotype"
    );
    assert_eq!(
        lines[1],
        "M1\tB6-Cre/+\t2022-11-02\t25.3\tNA\t22\tE1\t2023-03-01 10:00:00\t2023-03-04 10:00:00\tQB_hetero"
    );
}

#[test]
fn timeseries_tsv_format() {
    let row = TimeSeriesRow {
        id: "M1".into(),
        genotype: "QB_hetero".into(),
        time: 12,
        datetime: "2023-03-01 10:12:00".into(),
        vo2: Some(3.5),
        rq: None,
        vco2: Some(2.75),
        vo2_baseline: Some(3.0),
        vo2_baseline_adjusted: Some(0.5),
    };
    let mut buf = Vec::new();
    write_timeseries(&mut buf, &[row]).unwrap();
    let content = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "id\tgenotype\ttime\tdatetime\tvo2\trq\tvco2\tvo2Baseline\tvo2BaselineAdjusted"
    );
    assert_eq!(
        lines[1],
        "M1\tQB_hetero\t12\t2023-03-01 10:12:00\t3.5\tNA\t2.75\t3\t0.5"
    );
}

#[test]
fn small_values_are_written_exactly() {
    let row = TimeSeriesRow {
        id: "M1".into(),
        genotype: "QB_homo".into(),
        time: 0,
        datetime: "d".into(),
        vo2: Some(0.0000001),
        rq: Some(0.123456789),
        vco2: Some(f64::NAN),
        vo2_baseline: Some(0.0000002),
        vo2_baseline_adjusted: Some(-0.0000001),
    };
    let mut buf = Vec::new();
    write_timeseries(&mut buf, &[row]).unwrap();
    let content = String::from_utf8(buf).unwrap();
    let fields: Vec<&str> = content.lines().nth(1).unwrap().split('\t').collect();
    assert_eq!(fields[4], "0.0000001");
    assert_eq!(fields[5], "0.123456789");
    assert_eq!(fields[6], "NA");
    assert_eq!(fields[4].parse::<f64>().unwrap(), 0.0000001);
}

#[test]
fn tab_in_text_field_is_rejected() {
    let mut row = meta();
    row.id = "M\t1".into();
    let mut buf = Vec::new();
    let err = write_metadata(&mut buf, &[row]).unwrap_err();
    assert!(err.to_string().contains("id value"));
}

#[test]
fn allowlist_has_one_label_per_line() {
    let mut buf = Vec::new();
    write_allowlist(&mut buf).unwrap();
    let content = String::from_utf8(buf).unwrap();
    assert_eq!(
        content,
        "QB_hetero\nQB_homo\nQC_hetero\nQC_homo\nQD_hetero\nQD_homo\nQT_hetero\nQT_homo\n"
    );
}

#[test]
fn staged_outputs_replace_on_commit_only() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("nested").join("out");
    let dest = out.join("a.txt");

    let mut staged = StagedOutputs::new(&out).unwrap();
    staged
        .stage(&dest, |w| {
            w.write_all(b"first\n")?;
            Ok(())
        })
        .unwrap();
    assert!(!dest.exists());
    staged.commit().unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), "first\n");

    let mut staged = StagedOutputs::new(&out).unwrap();
    staged
        .stage(&dest, |w| {
            w.write_all(b"second\n")?;
            Ok(())
        })
        .unwrap();
    let written = staged.commit().unwrap();
    assert_eq!(written, vec![dest.clone()]);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "second\n");
    assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
}

#[test]
fn failed_stage_leaves_existing_file() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("a.txt");
    fs::write(&dest, "old\n").unwrap();

    let mut staged = StagedOutputs::new(tmp.path()).unwrap();
    let res = staged.stage(&dest, |w| {
        w.write_all(b"partial")?;
        anyhow::bail!("disk full")
    });
    assert!(res.is_err());
    drop(staged);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "old\n");
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn staged_outputs_keep_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("timeseries.tsv");
    fs::write(&dest, "old\n").unwrap();
    fs::set_permissions(&dest, fs::Permissions::from_mode(0o644)).unwrap();

    let mut staged = StagedOutputs::new(tmp.path()).unwrap();
    staged
        .stage(&dest, |w| {
            w.write_all(b"new\n")?;
            Ok(())
        })
        .unwrap();
    staged.commit().unwrap();

    let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(fs::read_to_string(&dest).unwrap(), "new\n");
}

#[cfg(unix)]
#[test]
fn staged_new_file_is_not_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("fresh.tsv");
    let mut staged = StagedOutputs::new(tmp.path()).unwrap();
    staged.stage(&dest, |_| Ok(())).unwrap();
    staged.commit().unwrap();

    // Same mode as a file created the ordinary way under this umask.
    let reference = tmp.path().join("reference.tsv");
    fs::File::create(&reference).unwrap();
    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&dest), mode(&reference));
}
