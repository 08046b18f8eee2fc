use clap::Parser;
use worktime_rust::{cli, config, error, export, ingest, normalizer, report};

use cli::{Cli, Commands};
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            json,
            output,
            chart_type,
            no_charts,
        } => {
            println!("📊 worktime - Davomat tahlili\n");

            // 1. Xom jadvalni o'qish va sarlavhani topish
            println!("[1/3] Faylni o'qish: {}", input.display());
            let raw = ingest::load_raw(&input)?;
            let header_row = ingest::header::detect_header_row(&raw, ingest::header::HEADER_TOKEN)?;
            let table = raw.with_header(header_row);
            let columns = ingest::header::resolve_columns(&table.headers)?;
            println!(
                "✔ Sarlavha {}-qatorda, {} ta qator topildi\n",
                header_row + 1,
                table.rows.len()
            );

            // 2. Normallashtirish
            println!("[2/3] Yozuvlarni normallashtirish...");
            let records = normalizer::normalize(&table, &columns);
            if cli.verbose {
                for record in &records {
                    println!(
                        "  {} | '{}' -> {} | '{}' -> {}",
                        record
                            .date
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "????-??-??".into()),
                        record.clock_in_raw,
                        record
                            .clock_in_time
                            .map(|t| t.time().format("%H:%M").to_string())
                            .unwrap_or_else(|| "-".into()),
                        record.clock_out_raw,
                        record
                            .clock_out_time
                            .map(|t| t.time().format("%H:%M").to_string())
                            .unwrap_or_else(|| "-".into()),
                    );
                }
            }
            println!("✔ {} ta yozuv\n", records.len());

            // 3. Kunlik hisob-kitob
            println!("[3/3] Kunlik hisob-kitob...");
            let days = report::aggregate(&records, &config::STANDARD_SHIFT);
            println!("✔ {} kun\n", days.len());

            println!("📅 Kunlik hisob-kitob\n");
            print!("{}", report::format_table(&days));
            println!(
                "\n💡 Umumiy ishxonada bo'lmagan vaqt: {:.2} soat",
                report::total_missing_hours(&days)
            );

            if let Some(json_path) = json {
                let rows: Vec<report::ReportRow> =
                    days.iter().map(report::ReportRow::from).collect();
                let payload = serde_json::to_string_pretty(&rows)?;
                std::fs::write(&json_path, payload)?;
                println!("✔ JSON natija: {}", json_path.display());
            }

            if let Some(output) = output {
                let charts = if no_charts { None } else { Some(chart_type) };
                let path = export::export_report(&days, &output, charts)?;
                println!("✔ Excel hisobot: {}", path.display());
            }

            println!("\n✅ Tahlil yakunlandi");
        }

        Commands::Template { output } => {
            println!("📄 worktime - Shablon yaratish\n");
            let path = export::export_template(&output)?;
            println!("✔ Shablon: {}", path.display());
            println!("\n✅ Tayyor");
        }
    }

    Ok(())
}
