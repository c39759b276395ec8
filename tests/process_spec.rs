use speculate2::speculate;
use threatmark::portfolio;
use threatmark_core::process::{run, Operation};

speculate! {
    before {
        let model = portfolio::model().expect("failed to build the Portfolio App model");
    }

    describe "analyze" {
        it "prints a findings table with a summary line" {
            let output = run(&model, Operation::Analyze).expect("analyze failed");
            assert!(output.contains("ID"));
            assert!(output.contains("SV01"));
            assert!(output.contains("Web Server"));
            assert!(output.contains("20 findings: 0 critical, 9 high, 9 medium, 2 low"));
        }
    }

    describe "dfd" {
        it "draws all four nodes and three labeled edges" {
            let output = run(&model, Operation::Dfd).expect("dfd failed");
            assert!(output.starts_with("digraph \"Portfolio App\" {"));
            for name in ["User", "Web Server", "API Server", "Database"] {
                assert!(output.contains(&format!("label = \"{name}\"")), "missing node {name}");
            }
            for label in ["HTTPS Request", "API Call", "Query"] {
                assert!(output.contains(&format!("[label = \"{label}\"]")), "missing edge {label}");
            }
        }
    }

    describe "seq" {
        it "renders a PlantUML sequence with one message per flow" {
            let output = run(&model, Operation::Sequence).expect("seq failed");
            assert!(output.starts_with("@startuml\n"));
            assert!(output.ends_with("@enduml\n"));
            assert!(output.contains("actor \"User\""));
            assert!(output.contains("database \"Database\""));
            assert_eq!(output.matches(" -> ").count(), 3);
        }
    }

    describe "report" {
        it "contains the header, the tables, and grouped findings" {
            let output = run(&model, Operation::Report).expect("report failed");
            assert!(output.starts_with("# Threat Model Report: Portfolio App"));
            assert!(output.contains("Portfolio virtual module threat model"));
            assert!(output.contains("| User | Web Server | HTTPS Request | - |"));
            assert!(output.contains("## Findings (20)"));
            assert!(output.contains("### High"));
            assert!(output.contains("Mitigation:"));
        }
    }

    describe "json" {
        it "exports the model, its findings, and a timestamp" {
            let output = run(&model, Operation::Json).expect("json failed");
            let value: serde_json::Value = serde_json::from_str(&output).expect("output is not JSON");

            assert_eq!(value["model"]["name"], "Portfolio App");
            assert_eq!(value["model"]["elements"].as_array().expect("elements").len(), 4);
            assert_eq!(value["model"]["dataflows"].as_array().expect("dataflows").len(), 3);
            assert_eq!(value["findings"].as_array().expect("findings").len(), 20);
            assert!(value["generated_at"].is_string());
        }
    }

    describe "sqldump" {
        it "writes a database holding every element, flow, and finding" {
            let dir = tempfile::tempdir().expect("tempdir failed");
            let path = dir.path().join("portfolio.db");

            let message = run(&model, Operation::SqlDump(path.clone())).expect("sqldump failed");
            assert!(message.contains("portfolio.db"));

            let conn = rusqlite::Connection::open(&path).expect("dump does not open");
            let count = |table: &str| -> i64 {
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
                    .expect("count failed")
            };
            assert_eq!(count("model"), 1);
            assert_eq!(count("elements"), 4);
            assert_eq!(count("dataflows"), 3);
            assert_eq!(count("findings"), 20);
        }

        it "replaces an existing file instead of appending" {
            let dir = tempfile::tempdir().expect("tempdir failed");
            let path = dir.path().join("portfolio.db");

            run(&model, Operation::SqlDump(path.clone())).expect("first dump failed");
            run(&model, Operation::SqlDump(path.clone())).expect("second dump failed");

            let conn = rusqlite::Connection::open(&path).expect("dump does not open");
            let models: i64 = conn
                .query_row("SELECT COUNT(*) FROM model", [], |row| row.get(0))
                .expect("count failed");
            assert_eq!(models, 1);
        }
    }
}
