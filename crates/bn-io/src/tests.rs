//! Unit tests for bn-io.

use std::io::Cursor;

/// Sample document with declared road distances: three buses over ten stops,
/// six stat requests.
const SAMPLE: &str = "\
13
Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka
Bus 256: Biryulyovo Zapadnoye > Biryusinka > Universam > Biryulyovo Tovarnaya > Biryulyovo Passazhirskaya > Biryulyovo Zapadnoye
Bus 750: Tolstopaltsevo - Marushkino - Rasskazovka
Stop Rasskazovka: 55.632761, 37.333324
Stop Biryulyovo Zapadnoye: 55.574371, 37.6517, 7500m to Rossoshanskaya ulitsa, 1800m to Biryusinka, 2400m to Universam
Stop Biryusinka: 55.581065, 37.64839, 750m to Universam
Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya
Stop Biryulyovo Tovarnaya: 55.592028, 37.653656, 1300m to Biryulyovo Passazhirskaya
Stop Biryulyovo Passazhirskaya: 55.580999, 37.659164, 1200m to Biryulyovo Zapadnoye
Bus 828: Biryulyovo Zapadnoye > Universam > Rossoshanskaya ulitsa > Biryulyovo Zapadnoye
Stop Rossoshanskaya ulitsa: 55.595579, 37.605757
Stop Prazhskaya: 55.611678, 37.603831
6
Bus 256
Bus 750
Bus 751
Stop Samara
Stop Prazhskaya
Stop Biryulyovo Zapadnoye
";

// ── Parser ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parser {
    use bn_core::BusId;

    use super::{Cursor, SAMPLE};
    use crate::{BaseRequest, IoError, StatRequest, parse_base_request, parse_stat_request, read_document};

    #[test]
    fn stop_with_distances() {
        let req = parse_base_request(
            1,
            "Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya",
        )
        .unwrap();
        assert_eq!(
            req,
            BaseRequest::Stop {
                name:      "Universam".into(),
                lat_deg:   55.587655,
                lon_deg:   37.645687,
                distances: vec![
                    ("Rossoshanskaya ulitsa".into(), 5_600),
                    ("Biryulyovo Tovarnaya".into(), 900),
                ],
            }
        );
    }

    #[test]
    fn stop_names_are_trimmed() {
        let req = parse_base_request(1, "Stop   Rasskazovka  : 55.632761, 37.333324   ").unwrap();
        let BaseRequest::Stop { name, distances, .. } = req else {
            panic!("expected a stop");
        };
        assert_eq!(name, "Rasskazovka");
        assert!(distances.is_empty());
    }

    #[test]
    fn linear_and_cyclic_routes() {
        let linear = parse_base_request(1, "Bus 750: Tolstopaltsevo - Marushkino - Rasskazovka").unwrap();
        assert_eq!(
            linear,
            BaseRequest::Bus {
                number: BusId(750),
                stops:  vec!["Tolstopaltsevo".into(), "Marushkino".into(), "Rasskazovka".into()],
                cycled: false,
            }
        );

        let cyclic = parse_base_request(2, "Bus 828: A > B-C > A").unwrap();
        assert_eq!(
            cyclic,
            BaseRequest::Bus {
                number: BusId(828),
                stops:  vec!["A".into(), "B-C".into(), "A".into()],
                cycled: true,
            }
        );
    }

    #[test]
    fn malformed_base_requests_report_line() {
        for line in [
            "Tram 1: A - B",
            "Bus x: A - B",
            "Bus 1: A - - B",
            "Stop A 55.0, 37.0",
            "Stop A: 55.0",
            "Stop A: north, 37.0",
            "Stop A: 55.0, 37.0, 12km to B",
            "Stop A: 55.0, 37.0, -5m to B",
            "Stop : 55.0, 37.0",
        ] {
            match parse_base_request(7, line) {
                Err(IoError::Parse { line: 7, .. }) => {}
                other => panic!("{line:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn stat_requests() {
        assert_eq!(parse_stat_request(1, "Bus 751").unwrap(), StatRequest::Bus(BusId(751)));
        assert_eq!(
            parse_stat_request(1, "Stop Biryulyovo Zapadnoye ").unwrap(),
            StatRequest::Stop("Biryulyovo Zapadnoye".into())
        );
        assert!(parse_stat_request(1, "Route 5").is_err());
        assert!(parse_stat_request(1, "Bus").is_err());
    }

    #[test]
    fn document_sections() {
        let doc = read_document(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(doc.base.len(), 13);
        assert_eq!(doc.stat.len(), 6);
        assert_eq!(doc.stat[2], StatRequest::Bus(BusId(751)));
    }

    #[test]
    fn truncated_document_is_an_error() {
        let err = read_document(Cursor::new("2\nStop A: 1, 2\n")).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }), "{err}");

        let err = read_document(Cursor::new("zero\n")).unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let doc = read_document(Cursor::new("\n1\n\nStop A: 1, 2\n\n1\nStop A\n")).unwrap();
        assert_eq!(doc.base.len(), 1);
        assert_eq!(doc.stat, vec![StatRequest::Stop("A".into())]);
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod format {
    use bn_core::BusId;
    use bn_network::BusMetrics;

    use crate::{StatResponse, format_significant};

    #[test]
    fn significant_digits() {
        assert_eq!(format_significant(1.3180841159233523, 6), "1.31808");
        assert_eq!(format_significant(1.36123919388153, 6), "1.36124");
        assert_eq!(format_significant(1.0, 6), "1");
        assert_eq!(format_significant(0.0, 6), "0");
        assert_eq!(format_significant(0.5, 6), "0.5");
        assert_eq!(format_significant(0.0001234, 6), "0.0001234");
        assert_eq!(format_significant(0.00001234, 6), "1.234e-05");
        assert_eq!(format_significant(999999.0, 6), "999999");
        assert_eq!(format_significant(9999996.0, 6), "1e+07");
        assert_eq!(format_significant(-2.5, 6), "-2.5");
        assert_eq!(format_significant(f64::INFINITY, 6), "inf");
    }

    #[test]
    fn bus_lines() {
        let found = StatResponse::Bus {
            number:  BusId(750),
            metrics: Some(BusMetrics {
                bus:             BusId(750),
                stops_on_route:  5,
                unique_stops:    3,
                declared_length: 27_600,
                direct_length:   20_939.48,
                curvature:       1.3180841,
            }),
        };
        assert_eq!(
            found.to_string(),
            "Bus 750: 5 stops on route, 3 unique stops, 27600 route length, 1.31808 curvature"
        );

        let missing = StatResponse::Bus { number: BusId(751), metrics: None };
        assert_eq!(missing.to_string(), "Bus 751: not found");
    }

    #[test]
    fn stop_lines() {
        let unknown = StatResponse::Stop { name: "Samara".into(), buses: None };
        let idle = StatResponse::Stop { name: "Prazhskaya".into(), buses: Some(vec![]) };
        let busy = StatResponse::Stop {
            name:  "Biryulyovo Zapadnoye".into(),
            buses: Some(vec![BusId(256), BusId(828)]),
        };
        assert_eq!(unknown.to_string(), "Stop Samara: not found");
        assert_eq!(idle.to_string(), "Stop Prazhskaya: no buses");
        assert_eq!(busy.to_string(), "Stop Biryulyovo Zapadnoye: buses 256 828");
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use approx::assert_relative_eq;

    use bn_core::{BusId, NetworkConfig};
    use bn_network::NetworkError;

    use super::{Cursor, SAMPLE};
    use crate::{IoError, answer, build_network, process, read_document};

    #[test]
    fn sample_document_output() {
        let mut out = Vec::new();
        process(Cursor::new(SAMPLE), &mut out, NetworkConfig::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "\
Bus 256: 6 stops on route, 5 unique stops, 5950 route length, 1.36124 curvature
Bus 750: 5 stops on route, 3 unique stops, 27600 route length, 1.31808 curvature
Bus 751: not found
Stop Samara: not found
Stop Prazhskaya: no buses
Stop Biryulyovo Zapadnoye: buses 256 828
"
        );
    }

    #[test]
    fn reverse_fallback_on_cyclic_route() {
        let doc = read_document(Cursor::new(SAMPLE)).unwrap();
        let mut net = build_network(&doc.base, NetworkConfig::default()).unwrap();
        // Rossoshanskaya ulitsa → Biryulyovo Zapadnoye is only declared the other way.
        let m = net.bus_metrics(BusId(828)).unwrap().unwrap();
        assert_eq!(m.stops_on_route, 4);
        assert_eq!(m.unique_stops, 3);
        assert_eq!(m.declared_length, 15_500);
        assert_relative_eq!(m.curvature, 1.95908, max_relative = 1e-5);
    }

    #[test]
    fn undeclared_hop_aborts_the_batch() {
        let input = "\
3
Stop A: 55.0, 37.0
Stop B: 55.1, 37.0
Bus 1: A - B
1
Bus 1
";
        let doc = read_document(Cursor::new(input)).unwrap();
        let mut net = build_network(&doc.base, NetworkConfig::default()).unwrap();
        let err = answer(&mut net, &doc.stat).unwrap_err();
        assert!(matches!(
            err,
            IoError::Network(NetworkError::MissingDeclaredDistance { .. })
        ));
    }

    #[test]
    fn bus_over_undeclared_stop_fails_to_build() {
        let input = "1\nBus 1: A - B\n0\n";
        let doc = read_document(Cursor::new(input)).unwrap();
        assert!(matches!(
            build_network(&doc.base, NetworkConfig::default()),
            Err(IoError::Network(NetworkError::UnknownStop { .. }))
        ));
    }

    #[test]
    fn conflicting_declarations_are_rejected() {
        let input = "\
2
Stop A: 55.0, 37.0, 100m to B
Stop A: 55.0, 37.0, 200m to B
0
";
        let doc = read_document(Cursor::new(input)).unwrap();
        assert!(matches!(
            build_network(&doc.base, NetworkConfig::default()),
            Err(IoError::Network(NetworkError::ConflictingDistance { .. }))
        ));
    }
}
