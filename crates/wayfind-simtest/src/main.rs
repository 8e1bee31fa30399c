//! Wayfind Headless Route Harness
//!
//! Validates the campus layout, the bundled POI catalog and the routes
//! generated between them. Runs entirely in-process — no UI, no network.
//!
//! Usage:
//!   cargo run -p wayfind-simtest
//!   cargo run -p wayfind-simtest -- --verbose
//!   cargo run -p wayfind-simtest -- --facility layout.json
//!   cargo run -p wayfind-simtest -- --route ONCOLOGY [--json]
//!
//! Set `RUST_LOG=debug` to see the planner's branch decisions.

use std::process;

use wayfind_logic::catalog::PoiCatalog;
use wayfind_logic::cursor::StepCursor;
use wayfind_logic::facility::{FacilityConfig, Point};
use wayfind_logic::planner::RoutePlanner;
use wayfind_logic::route::{RouteData, StepAction};
use wayfind_logic::validation::{self, Severity};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    json: bool,
    facility_path: Option<String>,
    route_to: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        json: false,
        facility_path: None,
        route_to: None,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--json" => options.json = true,
            "--facility" => options.facility_path = Some(flag_value(&arg, args.next())?),
            "--route" => options.route_to = Some(flag_value(&arg, args.next())?),
            other => log::warn!("Ignoring unknown argument {other:?}"),
        }
    }
    Ok(options)
}

fn flag_value(flag: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.starts_with("--") => Ok(v),
        _ => Err(format!("{flag} needs a value")),
    }
}

fn load_facility(path: Option<&str>) -> Result<FacilityConfig, String> {
    let Some(path) = path else {
        return Ok(FacilityConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let facility = serde_json::from_str(&text).map_err(|e| format!("{path}: {e}"))?;
    log::info!("Loaded facility layout from {path}");
    Ok(facility)
}

fn main() {
    env_logger::init();
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Bad arguments: {e}");
            process::exit(2);
        }
    };

    let facility = match load_facility(options.facility_path.as_deref()) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to load facility layout: {e}");
            process::exit(2);
        }
    };
    let catalog = match PoiCatalog::builtin() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load POI catalog: {e}");
            process::exit(2);
        }
    };

    if let Some(id) = options.route_to.as_deref() {
        process::exit(print_route(&facility, &catalog, id, options.json));
    }

    println!("=== Wayfind Route Harness ===\n");
    let mut results = Vec::new();

    // 1. Layout and catalog
    results.extend(validate_campus(&facility, &catalog, options.verbose));

    // 2. Reference scenarios and catalog sweep
    match RoutePlanner::new(facility.clone()) {
        Ok(planner) => {
            results.extend(validate_scenarios(&planner, &catalog, options.verbose));
            results.extend(validate_catalog_sweep(&planner, &catalog, options.verbose));
            results.extend(validate_cursor_walks(&planner, &catalog, options.verbose));
        }
        Err(e) => results.push(TestResult {
            name: "planner_construction".into(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        process::exit(1);
    }
}

// ── Single route dump ───────────────────────────────────────────────────

fn print_route(facility: &FacilityConfig, catalog: &PoiCatalog, id: &str, json: bool) -> i32 {
    let poi = match catalog.require(id) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Cannot route: {e}");
            return 1;
        }
    };
    let planned = RoutePlanner::new(facility.clone())
        .and_then(|planner| planner.plan(facility.entrance, poi));
    let route = match planned {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Cannot route to {id}: {e}");
            return 1;
        }
    };

    if json {
        match serde_json::to_string_pretty(&route) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Cannot serialize route: {e}");
                return 1;
            }
        }
        return 0;
    }

    println!(
        "Route to {} ({}, Level {}):",
        route.destination.name, route.destination.building, route.destination.location.floor
    );
    for (i, step) in route.steps.iter().enumerate() {
        let ride = match step.action {
            StepAction::Elevator { arrival_floor } => format!(" [-> floor {arrival_floor}]"),
            _ => String::new(),
        };
        println!(
            "  {:>2}. {:<9} {:>3}u  {}{}",
            i + 1,
            step.action.kind(),
            step.distance_units,
            step.instruction,
            ride
        );
    }
    println!(
        "  total {}u (steps sum to {}u), about {} min",
        route.total_distance_units,
        route.step_distance_sum(),
        route.estimated_minutes
    );
    0
}

// ── 1. Campus layout ────────────────────────────────────────────────────

fn validate_campus(facility: &FacilityConfig, catalog: &PoiCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Campus Layout ---");
    let mut results = Vec::new();

    let findings = validation::validate_campus(facility, catalog.as_slice());
    let errors: Vec<_> = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    let warnings = findings.len() - errors.len();

    results.push(TestResult {
        name: "campus_layout_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("no errors, {} warnings", warnings)
        } else {
            errors
                .iter()
                .map(|e| format!("[{}] {}", e.category, e.message))
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    results.push(TestResult {
        name: "catalog_not_empty".into(),
        passed: !catalog.is_empty(),
        detail: format!("{} POIs loaded", catalog.len()),
    });

    if verbose {
        for f in &findings {
            println!("    [{:?}] {}: {}", f.severity, f.category, f.message);
        }
    }

    results
}

// ── 2. Reference scenarios ──────────────────────────────────────────────

fn kinds(route: &RouteData) -> Vec<&'static str> {
    route.steps.iter().map(|s| s.action.kind()).collect()
}

fn validate_scenarios(planner: &RoutePlanner, catalog: &PoiCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Reference Scenarios ---");
    let scenarios: [(&str, Point, &str, &[&str]); 4] = [
        (
            "same_wing_same_floor",
            Point::new(200.0, 350.0, 0),
            "RECEPTION",
            &["straight", "arrive"],
        ),
        (
            "same_wing_other_floor",
            Point::new(200.0, 350.0, 0),
            "CAFETERIA",
            &["straight", "elevator", "straight", "arrive"],
        ),
        (
            "cross_wing_to_bridge_floor",
            Point::new(200.0, 350.0, 0),
            "RADIOLOGY",
            &["straight", "elevator", "straight", "arrive"],
        ),
        (
            "cross_wing_from_bridge_floor",
            Point::new(200.0, 200.0, 1),
            "ONCOLOGY",
            &["straight", "straight", "elevator", "arrive"],
        ),
    ];

    let mut results = Vec::new();
    for (name, origin, id, expected) in scenarios {
        let outcome = catalog
            .require(id)
            .map_err(|e| e.to_string())
            .and_then(|poi| planner.plan(origin, poi).map_err(|e| e.to_string()));
        let (passed, detail) = match outcome {
            Ok(route) => {
                let got = kinds(&route);
                if verbose {
                    for step in &route.steps {
                        println!("    {name}: {}", step.instruction);
                    }
                }
                (got == expected, format!("{origin} -> {id}: {}", got.join(" → ")))
            }
            Err(e) => (false, e),
        };
        results.push(TestResult {
            name: format!("scenario_{name}"),
            passed,
            detail,
        });
    }
    results
}

// ── 3. Catalog sweep ────────────────────────────────────────────────────

fn validate_catalog_sweep(planner: &RoutePlanner, catalog: &PoiCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Catalog Sweep ---");
    let facility = planner.facility();
    let origins: Vec<Point> = std::iter::once(facility.entrance)
        .chain(catalog.iter().map(|p| p.location))
        .collect();

    let mut routed = 0;
    let mut malformed = Vec::new();
    let mut nondeterministic = 0;
    let mut redundant_rides = 0;

    for origin in &origins {
        for poi in catalog.iter() {
            let route = match planner.plan(*origin, poi) {
                Ok(r) => r,
                Err(e) => {
                    malformed.push(format!("{origin} -> {}: {e}", poi.id));
                    continue;
                }
            };
            routed += 1;

            let problems = route.invariant_violations();
            if !problems.is_empty() {
                malformed.push(format!("{origin} -> {}: {}", poi.id, problems.join(", ")));
            }
            if planner.plan(*origin, poi).ok().as_ref() != Some(&route) {
                nondeterministic += 1;
            }
            let crosses = facility.zone_of(origin).ok() != facility.zone_of(&poi.location).ok();
            let rides_first = route.steps.iter().take(2).any(|s| s.action.is_elevator());
            if crosses && origin.floor == facility.connector_floor && rides_first {
                redundant_rides += 1;
            }
        }
    }

    if verbose {
        println!("    {} routes from {} origins", routed, origins.len());
    }

    vec![
        TestResult {
            name: "sweep_well_formed".into(),
            passed: malformed.is_empty(),
            detail: if malformed.is_empty() {
                format!("{routed} routes, all well-formed")
            } else {
                format!("{} bad: {}", malformed.len(), malformed[0])
            },
        },
        TestResult {
            name: "sweep_deterministic".into(),
            passed: nondeterministic == 0,
            detail: format!("{nondeterministic} routes differed on replay"),
        },
        TestResult {
            name: "sweep_no_redundant_rides".into(),
            passed: redundant_rides == 0,
            detail: format!("{redundant_rides} bridge-floor starts rode an elevator first"),
        },
    ]
}

// ── 4. Cursor walks ─────────────────────────────────────────────────────

fn validate_cursor_walks(planner: &RoutePlanner, catalog: &PoiCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Cursor Walks ---");
    let entrance = planner.facility().entrance;
    let mut wrong_final_floor = Vec::new();

    for poi in catalog.iter() {
        let cursor = planner
            .plan(entrance, poi)
            .map_err(|e| e.to_string())
            .and_then(|route| StepCursor::new(route).map_err(|e| e.to_string()));
        let mut cursor = match cursor {
            Ok(c) => c,
            Err(e) => {
                wrong_final_floor.push(format!("{}: {e}", poi.id));
                continue;
            }
        };
        let mut floors = vec![cursor.current_floor()];
        while cursor.advance() {
            floors.push(cursor.current_floor());
        }
        if verbose {
            println!("    {:<14} floors {:?}", poi.id, floors);
        }
        if floors.last() != Some(&poi.location.floor) || floors.first() != Some(&entrance.floor) {
            wrong_final_floor.push(format!("{}: {:?}", poi.id, floors));
        }
    }

    vec![TestResult {
        name: "cursor_floor_tracking".into(),
        passed: wrong_final_floor.is_empty(),
        detail: if wrong_final_floor.is_empty() {
            format!("{} walks start on the entrance floor and end on the POI floor", catalog.len())
        } else {
            wrong_final_floor.join("; ")
        },
    }]
}
