//! Building networks from CSV feeds.

use std::fs;
use std::path::Path;

use metroroute_core::prelude::*;
use tempfile::TempDir;

fn write_feed(dir: &Path, stations: &str, connections: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("stations.csv"), stations).unwrap();
    fs::write(dir.join("connections.csv"), connections).unwrap();
}

fn demo_feed() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/ankara")
}

#[test]
fn demo_feed_matches_sample_network() {
    let config = NetworkConfig::new(vec![demo_feed()]);
    let network = create_metro_network(&config).unwrap();
    let sample = sample_network();

    assert_eq!(network.station_count(), sample.station_count());
    assert_eq!(network.connection_count(), sample.connection_count());
    assert_eq!(network.line_count(), 3);

    let route = network.find_fastest_route("M1", "K4").unwrap();
    assert_eq!(route.travel_time(), 25);

    // names are read as UTF-8
    assert_eq!(network.station_by_id("T1").unwrap().name, "Batıkent");
}

#[test]
fn loading_runs_off_the_calling_thread() {
    let config = NetworkConfig::new(vec![demo_feed()]);
    let network = std::thread::spawn(move || create_metro_network(&config))
        .join()
        .unwrap()
        .unwrap();

    let ids = ["T1", "K4"];
    let matrix = std::thread::scope(|s| {
        s.spawn(|| travel_time_matrix(&network, &ids[..]))
            .join()
            .unwrap()
    });
    assert_eq!(matrix, [[Some(0), Some(18)], [Some(18), Some(0)]]);
}

#[test]
fn connections_may_cross_feeds() {
    let tmp = TempDir::new().unwrap();
    let red = tmp.path().join("red");
    let blue = tmp.path().join("blue");
    write_feed(
        &red,
        "station_id,name,line\nR1,Red One,Red\nR2,Red Two,Red\n",
        "from_station_id,to_station_id,minutes\nR1,R2,4\nR2,B1,1\n",
    );
    write_feed(
        &blue,
        "station_id,name,line\nB1,Blue One,Blue\nB2,Blue Two,Blue\n",
        "from_station_id,to_station_id,minutes\nB1,B2,6\n",
    );

    let network = create_metro_network(&NetworkConfig::new(vec![red, blue])).unwrap();
    let route = network.find_fastest_route("R1", "B2").unwrap();

    assert_eq!(route.station_ids(), ["R1", "R2", "B1", "B2"]);
    assert_eq!(route.travel_time(), 11);
}

#[test]
fn first_feed_wins_on_duplicate_station() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first");
    let second = tmp.path().join("second");
    write_feed(
        &first,
        "station_id,name,line\nX,Original,Red\n",
        "from_station_id,to_station_id,minutes\n",
    );
    write_feed(
        &second,
        "station_id,name,line\nX,Replacement,Blue\n",
        "from_station_id,to_station_id,minutes\n",
    );

    let network = create_metro_network(&NetworkConfig::new(vec![first, second])).unwrap();

    assert_eq!(network.station_count(), 1);
    assert_eq!(network.station_by_id("X").unwrap().name, "Original");
    assert_eq!(network.lines(), ["Red"]);
}

#[test]
fn malformed_rows_are_skipped() {
    let tmp = TempDir::new().unwrap();
    write_feed(
        tmp.path(),
        "station_id,name,line\nA,Alpha,Red\nB,Beta\nC,Gamma,Red\n",
        "from_station_id,to_station_id,minutes\nA,C,3\nA,C,-1\nA,C,soon\n",
    );

    let network = create_metro_network(&NetworkConfig::new(vec![tmp.path().to_path_buf()])).unwrap();

    assert_eq!(network.station_count(), 2);
    assert_eq!(network.connection_count(), 1);
}

#[test]
fn connection_to_missing_station_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_feed(
        tmp.path(),
        "station_id,name,line\nA,Alpha,Red\n",
        "from_station_id,to_station_id,minutes\nA,Q,3\n",
    );

    let err = create_metro_network(&NetworkConfig::new(vec![tmp.path().to_path_buf()])).unwrap_err();
    assert!(matches!(err, Error::UnknownStation(ref id) if id == "Q"));
}

#[test]
fn invalid_configurations() {
    let err = create_metro_network(&NetworkConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));

    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let err = create_metro_network(&NetworkConfig::new(vec![missing])).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));

    // directory exists but has no feed files
    let err = create_metro_network(&NetworkConfig::new(vec![tmp.path().to_path_buf()])).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}
