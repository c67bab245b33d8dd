use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compliance-report")]
#[command(about = "コンプライアンス出力のステータス判定・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（-vv でさらに詳細）
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スプレッドシートを判定してレポートを出力
    Process {
        /// 入力ファイル（xlsx/xls/xlsb/ods）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: 入力名_processed.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 判定設定JSON（保存済み設定の代わりに使用）
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// 高リスクキーワードを追加
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// 承認済み国コードを追加
        #[arg(long = "code")]
        codes: Vec<String>,

        /// xlsxの代わりにJSONで出力（出力先省略時は標準出力）
        #[arg(long)]
        json: bool,
    },

    /// 判定設定を表示/編集
    Config {
        /// 高リスクキーワードを追加
        #[arg(long)]
        add_keyword: Vec<String>,

        /// 高リスクキーワードを削除
        #[arg(long)]
        remove_keyword: Vec<String>,

        /// 承認済み国コードを追加
        #[arg(long)]
        add_code: Vec<String>,

        /// 承認済み国コードを削除
        #[arg(long)]
        remove_code: Vec<String>,

        /// 設定を初期化
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
