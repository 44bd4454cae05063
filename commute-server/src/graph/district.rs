//! Hand-curated transit graph for the Diliman commuter district.
//!
//! Terminal positions and edge weights are tuned constants: fares follow the
//! Metro Manila jeepney base fare of 13 pesos, times reflect off-peak
//! traffic. Edges are directed; connections that run both ways are wired in
//! both directions explicitly.

use crate::domain::{LatLng, TerminalKind, TravelMode};

use super::{EdgeWeights, Terminal, TransitGraph};

/// Build the district graph.
///
/// Called once at startup; the result is shared read-only for the process
/// lifetime.
pub fn district_graph() -> TransitGraph {
    let mut g = TransitGraph::new();

    let terminals = [
        (
            "ts_palengke",
            "Teacher's Village Palengke",
            "Matatag St cor. Maginhawa St, Teacher's Village",
            14.6741,
            121.0359,
            TerminalKind::Tricycle,
        ),
        (
            "visayas_ave",
            "Visayas Avenue Jeepney Stop",
            "Visayas Ave cor. Congressional Ave",
            14.6697,
            121.0445,
            TerminalKind::Jeep,
        ),
        (
            "technohub",
            "UP-Ayala Land TechnoHub",
            "Commonwealth Ave, UP Campus",
            14.6575,
            121.0580,
            TerminalKind::Mixed,
        ),
        (
            "philcoa",
            "Philcoa Terminal",
            "Commonwealth Ave cor. Elliptical Rd",
            14.6549,
            121.0452,
            TerminalKind::Jeep,
        ),
        (
            "sm_north",
            "SM City North EDSA",
            "EDSA cor. North Ave",
            14.6564,
            121.0302,
            TerminalKind::Bus,
        ),
        (
            "up_campus",
            "UP Diliman Academic Oval",
            "Osmeña Ave, UP Diliman",
            14.6547,
            121.0644,
            TerminalKind::EJeep,
        ),
        (
            "qc_hall",
            "Quezon City Hall",
            "Elliptical Rd, Diliman",
            14.6472,
            121.0509,
            TerminalKind::Mixed,
        ),
        (
            "parks_wildlife",
            "Ninoy Aquino Parks & Wildlife",
            "Quezon Ave cor. Elliptical Rd",
            14.6526,
            121.0437,
            TerminalKind::Mixed,
        ),
    ];

    for (id, name, address, lat, lng, kind) in terminals {
        g.add_terminal(Terminal {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            position: LatLng::new(lat, lng),
            kind,
        })
        .expect("district terminal ids are unique");
    }

    let rides: [(&str, &str, f64, f64, f64, &str); 10] = [
        ("ts_palengke", "visayas_ave", 1.6, 15.0, 20.0, "tricycle"),
        ("visayas_ave", "technohub", 3.4, 25.0, 13.0, "jeep"),
        ("ts_palengke", "philcoa", 2.8, 22.0, 13.0, "jeep"),
        ("philcoa", "technohub", 1.7, 20.0, 13.0, "jeep"),
        ("ts_palengke", "up_campus", 2.4, 25.0, 13.0, "jeep"),
        ("up_campus", "technohub", 1.5, 18.0, 15.0, "e-jeep"),
        ("visayas_ave", "sm_north", 2.9, 20.0, 15.0, "jeep"),
        ("sm_north", "philcoa", 2.2, 18.0, 15.0, "bus"),
        ("philcoa", "qc_hall", 1.3, 10.0, 13.0, "jeep"),
        ("philcoa", "up_campus", 2.1, 14.0, 13.0, "jeep"),
    ];

    for (a, b, km, min, cost, vehicle) in rides {
        two_way(&mut g, a, b, ride(km, min, cost, vehicle));
    }

    let walks: [(&str, &str, f64, f64); 2] = [
        ("philcoa", "parks_wildlife", 0.6, 9.0),
        ("qc_hall", "parks_wildlife", 0.8, 12.0),
    ];

    for (a, b, km, min) in walks {
        two_way(&mut g, a, b, walk(km, min));
    }

    g
}

fn ride(km: f64, min: f64, cost: f64, vehicle: &str) -> EdgeWeights {
    EdgeWeights {
        distance_km: km,
        time_min: min,
        cost,
        mode: TravelMode::Ride,
        vehicle: Some(vehicle.to_string()),
    }
}

fn walk(km: f64, min: f64) -> EdgeWeights {
    EdgeWeights {
        distance_km: km,
        time_min: min,
        cost: 0.0,
        mode: TravelMode::Walk,
        vehicle: None,
    }
}

fn two_way(g: &mut TransitGraph, a: &str, b: &str, weights: EdgeWeights) {
    g.add_edge(a, b, weights.clone())
        .expect("district edge endpoints exist");
    g.add_edge(b, a, weights)
        .expect("district edge endpoints exist");
}
