//! Integration tests: observations in, tables out, through real files.

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use arrow::array::AsArray;
use arrow::datatypes::{Float64Type, UInt64Type};
use chrono::{NaiveDate, TimeDelta};
use evapo_calendar::{Cadence, TimeIndex};
use evapo_io::{
    Compression, FrameColumn, IoError, OutputFrame, QUALITY_COLUMN, ReaderConfig, WriterConfig,
    read_observations, write_frame,
};
use evapo_methods::{EtBounds, eto_both, eto_fao};
use evapo_params::{Field, Site, estimate};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

const BRUSSELS_CSV: &str = "\
date,T_max,T_min,RH_max,RH_min,U_z,n_sun,station
2023-07-06,21.5,12.3,84,63,2.7777777777777777,9.25,uccle
";

fn brussels_site() -> Site {
    Site::new()
        .with_elevation(100.0)
        .with_latitude(50.80)
        .with_wind_height(10.0)
}

fn read_parquet_batch(path: &Path) -> arrow::array::RecordBatch {
    let file = fs::File::open(path).unwrap();
    let mut reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    reader.next().unwrap().unwrap()
}

#[test]
fn csv_observations_feed_the_cascade() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brussels.csv");
    fs::write(&path, BRUSSELS_CSV).unwrap();

    let obs = read_observations(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(obs.len(), 1);
    assert_eq!(obs.fields().count(), 6);
    assert_eq!(obs.index().days_of_year(), vec![187]);

    let (params, quality) = estimate(&obs, &brussels_site(), Cadence::Daily).unwrap();
    assert_eq!(quality.codes(), vec![1_111_110]);

    let et = eto_fao(&params, Cadence::Daily, &EtBounds::default(), None).unwrap();
    assert_relative_eq!(et.column("ETo_FAO_mm").unwrap()[0], 3.88, epsilon = 1e-9);
}

#[test]
fn et_table_roundtrips_through_parquet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("brussels.csv");
    fs::write(&input, BRUSSELS_CSV).unwrap();
    let obs = read_observations(&input, &ReaderConfig::default()).unwrap();
    let (params, _) = estimate(&obs, &brussels_site(), Cadence::Daily).unwrap();
    let et = eto_both(&params, Cadence::Daily, &EtBounds::default(), None).unwrap();

    let output = dir.path().join("eto.parquet");
    let frame = OutputFrame::from_et(&et).unwrap();
    write_frame(
        &output,
        &frame,
        &WriterConfig::default().with_compression(Compression::Zstd),
    )
    .unwrap();

    let batch = read_parquet_batch(&output);
    let schema = batch.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["date", "ETo_FAO_mm", "ETo_Har_mm"]);
    let fao = batch.column(1).as_primitive::<Float64Type>();
    let har = batch.column(2).as_primitive::<Float64Type>();
    assert_relative_eq!(fao.value(0), 3.88, epsilon = 1e-9);
    assert_relative_eq!(har.value(0), 4.06, epsilon = 1e-9);
}

#[test]
fn params_csv_has_quality_codes_and_empty_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("obs.csv");
    fs::write(
        &input,
        "date,T_max,T_min\n2020-01-15,25,15\n2020-01-16,,14\n2020-01-17,26,16\n",
    )
    .unwrap();
    let obs = read_observations(&input, &ReaderConfig::default()).unwrap();
    let (params, quality) = estimate(&obs, &Site::new(), Cadence::Daily).unwrap();

    let output = dir.path().join("params.csv");
    let frame = OutputFrame::from_params(&params, &quality).unwrap();
    assert_eq!(frame.names().last(), Some(QUALITY_COLUMN));
    write_frame(&output, &frame, &WriterConfig::default()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("date,P,gamma,T_max,T_min,T_mean"));
    assert!(lines[0].ends_with(",est_val"));
    assert!(lines[1].starts_with("2020-01-15,"));
    assert!(lines[1].ends_with(",1132111"));
    // T_max is missing on the second day, so T_max and everything after it
    // that depends on it is written as an empty field.
    let second: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(second[3], "");
}

#[test]
fn parquet_observations_with_hourly_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hourly.parquet");
    let start = NaiveDate::from_ymd_opt(2023, 10, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let index = TimeIndex::new((0..3).map(|i| start + TimeDelta::hours(i)).collect()).unwrap();
    let frame = OutputFrame::new(&index)
        .with_column("T_mean", FrameColumn::Float64(vec![38.0, f64::NAN, 36.0]))
        .unwrap()
        .with_column("RH_mean", FrameColumn::Float64(vec![52.0, 55.0, 60.0]))
        .unwrap()
        .with_column("note", FrameColumn::UInt64(vec![1, 2, 3]))
        .unwrap();
    write_frame(&path, &frame, &WriterConfig::default()).unwrap();

    let obs = read_observations(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(obs.index().timestamps(), index.timestamps());
    assert_eq!(obs.fields().collect::<Vec<_>>(), vec![Field::TMean, Field::RhMean]);
    let t = obs.column(Field::TMean).unwrap();
    assert_eq!(t[0], 38.0);
    assert!(t[1].is_nan());
    assert_eq!(obs.index().inferred_cadence(), Some(Cadence::SubDaily));
}

#[test]
fn quality_column_is_unsigned_in_parquet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("obs.csv");
    fs::write(&input, "date,T_max,T_min,RH_mean\n2020-01-15,25,15,60\n").unwrap();
    let obs = read_observations(&input, &ReaderConfig::default()).unwrap();
    let (params, quality) = estimate(&obs, &Site::new(), Cadence::Daily).unwrap();

    let output = dir.path().join("params.parquet");
    write_frame(
        &output,
        &OutputFrame::from_params(&params, &quality).unwrap(),
        &WriterConfig::default().with_compression(Compression::None),
    )
    .unwrap();

    let batch = read_parquet_batch(&output);
    let codes = batch
        .column(batch.num_columns() - 1)
        .as_primitive::<UInt64Type>();
    assert_eq!(codes.value(0), 1_122_111);
}

#[test]
fn semicolon_delimited_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.txt");
    fs::write(
        &path,
        "time;T_mean;P\n2023-10-01 14:00;38;101.3\n2023-10-01 15:00;37.5;\n",
    )
    .unwrap();
    let cfg = ReaderConfig::default()
        .with_date_column("time")
        .with_delimiter(b';');
    let obs = read_observations(&path, &cfg).unwrap();
    assert_eq!(obs.len(), 2);
    let p = obs.column(Field::Pressure).unwrap();
    assert_eq!(p[0], 101.3);
    assert!(p[1].is_nan());
}

#[test]
fn bad_dates_are_reported_together() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.csv");
    fs::write(
        &path,
        "date,T_max,T_max\n2020-01-01,1,1\n01/02/2020,2,2\n2020-01-03,3,3\n",
    )
    .unwrap();
    match read_observations(&path, &ReaderConfig::default()) {
        Err(IoError::Validation { count, details }) => {
            assert_eq!(count, 2);
            assert!(details.contains("duplicate column 'T_max'"));
            assert!(details.contains("row 2: cannot parse date '01/02/2020'"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn missing_date_column_and_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obs.csv");
    fs::write(&path, "day,T_max\n2020-01-01,1\n").unwrap();
    assert!(matches!(
        read_observations(&path, &ReaderConfig::default()),
        Err(IoError::MissingColumn { .. })
    ));

    let other = dir.path().join("obs.json");
    fs::write(&other, "{}").unwrap();
    assert!(matches!(
        read_observations(&other, &ReaderConfig::default()),
        Err(IoError::UnsupportedFormat { .. })
    ));
}

#[test]
fn date_column_clash_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let index = TimeIndex::new(vec![
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    ])
    .unwrap();
    let frame = OutputFrame::new(&index)
        .with_column("date", FrameColumn::Float64(vec![1.0]))
        .unwrap();
    let err = write_frame(&dir.path().join("x.csv"), &frame, &WriterConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
}
