use crate::core::engine::{CallOutcome, EquivalenceReport};
use crate::domain::model::Value;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line per outcome in text mode (`Foo.m2(3, 4) = (6, 8)`), a JSON array otherwise.
pub fn render_outcomes(outcomes: &[CallOutcome], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcomes
            .iter()
            .map(|o| match o.input {
                Value::Int(x) => format!("{}({}) = {}", o.label, x, o.output),
                Value::Bar(bar) => format!("{}{} = {}", o.label, bar, o.output),
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
    }
}

pub fn render_equivalence(report: &EquivalenceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mark = |ok: bool| if ok { "==" } else { "!=" };
            Ok(format!(
                "m1{input} = {} {} Foo.m1{input} = {}\nm2{input} = {} {} Foo.m2{input} = {}",
                report.free_m1,
                mark(report.m1_holds()),
                report.foo_m1,
                report.free_m2,
                mark(report.m2_holds()),
                report.foo_m2,
                input = report.input,
            ))
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(report)?;
            if let Some(map) = value.as_object_mut() {
                map.insert("holds".to_string(), serde_json::Value::Bool(report.holds()));
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::call::Call;
    use crate::core::engine::CallEngine;
    use crate::domain::model::Bar;

    #[test]
    fn test_render_text() {
        let engine = CallEngine::default();
        let outcomes = engine
            .run_batch(&[Call::FooM2(Bar::new(3, 4)), Call::FooM0(5), Call::FreeM1(Bar::new(-2, 5))])
            .unwrap();

        let text = render_outcomes(&outcomes, OutputFormat::Text).unwrap();
        assert_eq!(text, "Foo.m2(3, 4) = (6, 8)\nFoo.m0(5) = 10\nm1(-2, 5) = -10");
    }

    #[test]
    fn test_render_json() {
        let engine = CallEngine::default();
        let outcomes = engine.run_batch(&[Call::FreeM2(Bar::new(3, 4))]).unwrap();

        let json = render_outcomes(&outcomes, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["label"], "m2");
        assert_eq!(parsed[0]["receiver"], "free");
        assert_eq!(parsed[0]["output"]["a"], 6);
        assert_eq!(parsed[0]["output"]["b"], 8);
    }

    #[test]
    fn test_render_equivalence() {
        let report = CallEngine::default().check_equivalence(Bar::new(3, 4));

        let text = render_equivalence(&report, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "m1(3, 4) = 12 == Foo.m1(3, 4) = 12\nm2(3, 4) = (6, 8) == Foo.m2(3, 4) = (6, 8)"
        );

        let json = render_equivalence(&report, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["holds"], true);
        assert_eq!(parsed["free_m1"], 12);
    }
}
