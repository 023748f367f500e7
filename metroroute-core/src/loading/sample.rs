use crate::model::MetroNetwork;

const STATIONS: [(&str, &str, &str); 12] = [
    ("K1", "Kizilay", "Red Line"),
    ("K2", "Ulus", "Red Line"),
    ("K3", "Demetevler", "Red Line"),
    ("K4", "OSB", "Red Line"),
    ("M1", "ASTI", "Blue Line"),
    ("M2", "Kizilay", "Blue Line"),
    ("M3", "Sihhiye", "Blue Line"),
    ("M4", "Gar", "Blue Line"),
    ("T1", "Batıkent", "Orange Line"),
    ("T2", "Demetevler", "Orange Line"),
    ("T3", "Gar", "Orange Line"),
    ("T4", "Kecioren", "Orange Line"),
];

const CONNECTIONS: [(&str, &str, u32); 12] = [
    ("K1", "K2", 4),
    ("K2", "K3", 6),
    ("K3", "K4", 8),
    ("M1", "M2", 5),
    ("M2", "M3", 3),
    ("M3", "M4", 4),
    ("T1", "T2", 7),
    ("T2", "T3", 9),
    ("T3", "T4", 5),
    // transfers between lines
    ("K1", "M2", 2),
    ("K3", "T2", 3),
    ("M4", "T3", 2),
];

/// Small three-line network with transfers at Kizilay, Demetevler and Gar
pub fn sample_network() -> MetroNetwork {
    let mut network = MetroNetwork::new();
    for (id, name, line) in STATIONS {
        network.add_station(id, name, line);
    }
    for (from, to, minutes) in CONNECTIONS {
        network
            .add_connection(from, to, minutes)
            .unwrap_or_else(|e| unreachable!("sample connection {from}-{to}: {e}"));
    }
    network
}
