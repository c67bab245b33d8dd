use anyhow::Context;
use clap::Parser;
use compliance_report::{cli, config, export, logging, pipeline};
use cli::{Cli, Commands};
use compliance_report_common::ReportSummary;
use config::Settings;
use export::OutputFormat;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let settings = Settings::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Process { input, output, config: config_file, keywords, codes, json } => {
            // 進捗表示はstderr、stdoutは --json の出力専用
            eprintln!("📋 compliance-report - レポート生成\n");

            let classification = config::resolve_classification(
                &settings,
                config_file.as_deref(),
                &keywords,
                &codes,
            )?;

            // 1. 読み込み・判定
            eprintln!("[1/2] {} を処理中...", input.display());
            let report = pipeline::process_workbook(&input, &classification)
                .with_context(|| format!("{} の処理に失敗しました", input.display()))?;
            eprintln!("✔ {}行を判定\n", report.len());

            // 2. 出力
            eprintln!("[2/2] 結果を保存中...");
            let format = if json { OutputFormat::Json } else { OutputFormat::Excel };
            match (format, output) {
                (OutputFormat::Json, None) => {
                    println!("{}", export::report_json(&report)?);
                }
                (format, output) => {
                    let output_path = output
                        .unwrap_or_else(|| export::default_output_path(&input, format));
                    export::write_report(&report, format, &output_path)?;
                    eprintln!("✔ 出力: {}", output_path.display());
                }
            }

            print_summary(&report.summary());
            eprintln!("\n✅ 完了");
        }

        Commands::Config { add_keyword, remove_keyword, add_code, remove_code, reset, show } => {
            let mut settings = if reset { Settings::default() } else { settings };
            let changed = reset
                || !(add_keyword.is_empty()
                    && remove_keyword.is_empty()
                    && add_code.is_empty()
                    && remove_code.is_empty());

            for keyword in &add_keyword {
                settings.add_keyword(keyword);
            }
            for keyword in &remove_keyword {
                settings.remove_keyword(keyword);
            }
            for code in &add_code {
                settings.add_code(code);
            }
            for code in &remove_code {
                settings.remove_code(code);
            }

            if changed {
                settings.save()?;
                println!("✔ 設定を保存しました: {}", Settings::config_path()?.display());
            }

            if show || !changed {
                let classification = &settings.classification;
                println!("設定:");
                println!("  高リスクキーワード: {}", join_or_none(&classification.high_risk_keywords));
                println!("  承認済みコード: {}", join_or_none(&classification.approved_codes));
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &ReportSummary) {
    eprintln!("\n集計:");
    for (status, count) in &summary.counts {
        if *count > 0 {
            eprintln!("  {:<12} {}", status.label(), count);
        }
    }
    if summary.skipped_blank > 0 {
        eprintln!("  (空行 {}行をスキップ)", summary.skipped_blank);
    }
}

fn join_or_none(values: &std::collections::BTreeSet<String>) -> String {
    if values.is_empty() {
        "(なし)".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
