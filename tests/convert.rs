use std::fs;

use tempfile::tempdir;
use uds2csv::{asc, writer};

const TRACE: &str = "\
date Mon Mar 10 12:34:56.789 pm 2025
base hex  timestamps absolute
0.016728 1  7DF              Rx   d 8 02 01 00 00 00 00 00 00
0.020000 1  7E0              Rx   d 8 02 10 01 00 00 00 00 00
0.031200 1  7E8              Rx   d 8 06 50 01 00 32 01 F4 00
0.040000 1  18DAF110x        Rx   d 8 10 14 62 F1 90 57 30 4C
0.045000 1  1A2B             Tx   d 3 DE AD BE
Begin Triggerblock
";

#[test]
fn converts_trace_end_to_end() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("trace.asc");
    let output = dir.path().join("trace.csv");
    fs::write(&input, TRACE).expect("write input");

    let log = asc::parse::from_file(&input).expect("parse");
    assert!(log.absolute_time.value.is_some());
    assert_eq!(log.records.len(), 4);

    writer::save(&log, &output).expect("save");
    let csv = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        [
            "time,ID,Phy,Dir,TA,PCI,SID,Data1,Data2,Data3,Data4,Data5,Data6,Data7,Data8",
            "0.016728,7DF,0,Req,7DF,SF,01,02,01,00,00,00,00,00,00",
            "0.020000,7E0,-1,Req,7E0,SF,10,02,10,01,00,00,00,00,00",
            "0.031200,7E8,1,Res,7E8,SF,50,06,50,01,00,32,01,F4,00",
            "0.040000,18DAF110,1,Res,10,FF,62,10,14,62,F1,90,57,30,4C",
        ]
    );
}

#[test]
fn header_is_written_even_without_records() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("empty.asc");
    let output = dir.path().join("empty.csv");
    fs::write(&input, "no frames in here\njust text\n").expect("write input");

    let log = asc::parse::from_file(&input).expect("parse");
    assert!(log.records.is_empty());

    writer::save(&log, &output).expect("save");
    let csv = fs::read_to_string(&output).expect("read output");
    assert_eq!(
        csv,
        "time,ID,Phy,Dir,TA,PCI,SID,Data1,Data2,Data3,Data4,Data5,Data6,Data7,Data8\n"
    );
}

#[test]
fn missing_input_reports_open_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does_not_exist.asc");
    let err = asc::parse::from_file(&missing).expect_err("should fail");
    assert!(err.to_string().contains("does_not_exist.asc"));
}
