//! End-to-end walkthrough: parse a stored policy expression, pre-fetch the
//! attributes it depends on, and evaluate the decision.
//!
//! Run with: cargo run --example basic_decision

use verdict_engine::{AttributeContext, ExpressionParser};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // As retrieved from policy storage: allow when the resource sits in
    // region us/eu AND under the /biz,1/ branch of the resource hierarchy.
    let stored = r#"{
        "operator": "AND",
        "content": [
            {"operator": "StringEquals", "key": "region", "values": ["us", "eu"]},
            {"operator": "StringPrefix", "key": "iam_path", "values": ["/biz,1/set,*/"]}
        ]
    }"#;

    let parser = ExpressionParser::new();
    let condition = parser.parse_json(stored)?;

    // The pipeline fetches only the attributes the expression references.
    println!("expression depends on: {:?}", condition.get_keys());

    let request = AttributeContext::new()
        .with_attr("region", "eu")
        .with_attr("iam_path", "/biz,1/set,5/");
    println!("decision for eu//biz,1/set,5/: {}", condition.eval(&request));

    let request = AttributeContext::new()
        .with_attr("region", "ap")
        .with_attr("iam_path", "/biz,1/set,5/");
    println!("decision for ap//biz,1/set,5/: {}", condition.eval(&request));

    Ok(())
}
