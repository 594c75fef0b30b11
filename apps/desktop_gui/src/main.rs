mod ui;

use clap::Parser;
use crossbeam_channel::unbounded;
use eframe::egui;
use picker_core::{PickerConfig, PickerEvent};
use shared::condition::conditions_from_json;
use shared::{Condition, ConfigError};

use crate::ui::app::RulePickerApp;

/// Demo host for the rule/condition picker widgets.
#[derive(Debug, Parser)]
#[command(name = "rule-picker-demo")]
struct Args {
    /// Allowed condition types, in dropdown order.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Apple,Banana,Orange,Potato,Colors,Numbers"
    )]
    condition_types: Vec<String>,

    /// Type assigned to newly created conditions.
    #[arg(long, default_value = "Apple")]
    default_type: String,

    /// Initial rule as JSON text, e.g. '[{"type":"Apple","value":"granny smith"}]'.
    #[arg(long)]
    conditions: Option<String>,
}

fn parse_initial_conditions(text: Option<&str>) -> Result<Vec<Condition>, ConfigError> {
    match text {
        Some(text) => conditions_from_json(text),
        None => Ok(Vec::new()),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let config = match PickerConfig::new(args.condition_types, args.default_type.as_str()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };
    let initial = match parse_initial_conditions(args.conditions.as_deref()) {
        Ok(initial) => initial,
        Err(err) => {
            eprintln!("invalid --conditions: {err}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        condition_types = ?config.condition_types(),
        default_type = config.default_type(),
        "starting rule picker demo"
    );

    let (event_tx, event_rx) = unbounded::<PickerEvent>();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rule Picker Demo")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rule Picker Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(RulePickerApp::new(config, initial, event_tx, event_rx)))),
    )
}

#[cfg(test)]
mod tests {
    use super::parse_initial_conditions;
    use shared::{Condition, ConfigError};

    #[test]
    fn missing_conditions_argument_means_an_empty_rule() {
        let parsed = parse_initial_conditions(None).expect("parse");
        assert!(parsed.is_empty());
    }

    #[test]
    fn parses_conditions_argument_as_json() {
        let parsed = parse_initial_conditions(Some(
            r#"[{"type":"Apple","value":"granny smith"}]"#,
        ))
        .expect("parse");
        assert_eq!(parsed, vec![Condition::new("Apple", "granny smith")]);
    }

    #[test]
    fn reports_malformed_conditions_argument() {
        let err = parse_initial_conditions(Some("{nope")).expect_err("must fail");
        assert!(matches!(err, ConfigError::InvalidConditionList(_)));
    }
}
