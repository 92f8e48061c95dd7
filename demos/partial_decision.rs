//! Partial evaluation: settle the part of a policy covered by the
//! resources already in hand and keep the remainder for later.
//!
//! Run with: cargo run --example partial_decision

use verdict_engine::{AttributeContext, ExpressionParser};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // Scoped keys: "{system}.{type}.{attr}". The request carries host
    // attributes now; job attributes arrive in a later phase.
    let stored = r#"{
        "operator": "AND",
        "content": [
            {"operator": "StringEquals", "key": "bk_cmdb.host.system", "values": ["linux"]},
            {"operator": "StringEquals", "key": "bk_job.job.creator", "values": ["admin"]}
        ]
    }"#;

    let parser = ExpressionParser::new();
    let condition = parser.parse_json(stored)?;

    let ctx = AttributeContext::new().with_attr("bk_cmdb.host.system", "linux");

    match condition.partial_eval(&ctx) {
        None => println!("denied outright"),
        Some(remaining) => println!(
            "allowed so far, remaining condition: {} over {:?}",
            remaining.name(),
            remaining.get_keys()
        ),
    }

    Ok(())
}
