use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "worktime")]
#[command(about = "Ish vaqti va yo'q vaqtni hisoblash vositasi", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Har bir yozuv uchun batafsil log
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Davomat faylini tahlil qilib kunlik hisobot chiqarish
    Report {
        /// Davomat fayli (.xls yoki .xlsx)
        #[arg(required = true)]
        input: PathBuf,

        /// Natijani JSON faylga yozish
        #[arg(long)]
        json: Option<PathBuf>,

        /// Excel hisobot fayli (jadval + grafiklar)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Ish vaqti grafigi turi (line/area)
        #[arg(long, default_value = "line")]
        chart_type: ChartKind,

        /// Excel hisobotga grafik qo'shmaslik
        #[arg(long)]
        no_charts: bool,
    },

    /// Kutilgan fayl shaklini ko'rsatuvchi shablon yaratish
    Template {
        /// Shablon fayli
        #[arg(short, long, default_value = "attendance_template.xlsx")]
        output: PathBuf,
    },
}

/// Worked-hours chart style for the Excel report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Line,
    Area,
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "chiziqli" => Ok(ChartKind::Line),
            "area" | "maydon" => Ok(ChartKind::Area),
            _ => Err(format!("Unknown chart type: {}. Use line or area", s)),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Area => write!(f, "area"),
        }
    }
}
