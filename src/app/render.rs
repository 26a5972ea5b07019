use crate::domain::model::{MonthGroup, MovieDetailItem, MovieListItem};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Month sections, newest first.
    #[default]
    Grouped,
    /// One date-sorted list; undated movies at the end.
    Flat,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    month: &'a str,
    id: i64,
    title: &'a str,
    date: &'a str,
    score: &'a str,
    image_url: &'a str,
}

impl<'a> CsvRow<'a> {
    fn new(month: &'a str, item: &'a MovieListItem) -> Self {
        Self {
            month,
            id: item.id,
            title: &item.title,
            date: &item.date,
            score: &item.score,
            image_url: &item.image_url,
        }
    }
}

/// 月份分組清單。`[群組:項目]` 標記可直接拿來當 `--select` 參數
pub fn render_groups<W: Write>(
    out: &mut W,
    groups: &[MonthGroup],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (group_index, group) in groups.iter().enumerate() {
                writeln!(out, "== {} ==", group.title)?;
                for (item_index, item) in group.items.iter().enumerate() {
                    writeln!(
                        out,
                        "  [{}:{}] {:<10}  {:>5}  {}",
                        group_index, item_index, item.date, item.score, item.title
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, groups)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for group in groups {
                for item in &group.items {
                    writer.serialize(CsvRow::new(&group.title, item))?;
                }
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn render_flat<W: Write>(
    out: &mut W,
    items: &[MovieListItem],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (index, item) in items.iter().enumerate() {
                writeln!(
                    out,
                    "  [{}] {:<10}  {:>5}  {}",
                    index, item.date, item.score, item.title
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for item in items {
                writer.serialize(CsvRow::new("", item))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn render_detail<W: Write>(
    out: &mut W,
    detail: &MovieDetailItem,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", detail.title)?;
            writeln!(out, "  Date:     {}", detail.date)?;
            writeln!(out, "  Genres:   {}", detail.genres)?;
            writeln!(out, "  Score:    {}", detail.score)?;
            writeln!(out, "  Poster:   {}", detail.image_url)?;
            writeln!(out, "  Overview: {}", detail.overview)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, detail)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.serialize(detail)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// 載入失敗時的空畫面
pub fn render_empty<W: Write>(out: &mut W, message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "(no movies) {}", message)?,
        OutputFormat::Json => writeln!(out, "[]")?,
        OutputFormat::Csv => {}
    }
    Ok(())
}
