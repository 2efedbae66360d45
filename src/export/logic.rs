// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{build_csv, build_json};
use crate::export::model::rows_to_records;
use crate::export::xlsx::build_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::{GenerationResult, MealType};
use crate::ui::messages::info;
use crate::utils::date::to_file_stamp;
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered export, not yet on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

/// Projection of a generated kitchen list into a downloadable file.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the export for `result`. Pure: the result is only read and
    /// nothing touches the disk. No orders → `NoDataToExport`.
    pub fn project(
        result: Option<&GenerationResult>,
        date: &str,
        meal_type: MealType,
        format: ExportFormat,
    ) -> AppResult<Export> {
        let orders = match result {
            Some(r) if r.has_orders() => &r.orders,
            _ => return Err(AppError::NoDataToExport),
        };

        let records = rows_to_records(orders);

        let bytes = match format {
            ExportFormat::Xlsx => build_xlsx(&records)?,
            ExportFormat::Csv => build_csv(&records)?,
            ExportFormat::Json => build_json(&records)?,
        };

        Ok(Export {
            file_name: file_name(date, meal_type, format),
            format,
            bytes,
        })
    }

    /// Write `export` into `dir`, asking before overwriting unless `force`.
    pub fn write(export: &Export, dir: &Path, force: bool) -> AppResult<PathBuf> {
        if !dir.is_dir() {
            return Err(AppError::Export(format!(
                "Output directory does not exist: {}",
                dir.display()
            )));
        }

        let path = dir.join(&export.file_name);
        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {}: {}",
            export.format.as_str().to_uppercase(),
            path.display()
        ));
        fs::write(&path, &export.bytes)?;

        notify_export_success(&export.format.as_str().to_uppercase(), &path);
        Ok(path)
    }

    /// Keep a generated result on disk, in wire shape, for a later `export`.
    pub fn save_result(result: &GenerationResult, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;
        let json = serde_json::to_vec_pretty(result)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
        fs::write(path, json)?;
        notify_export_success("Result", path);
        Ok(())
    }

    /// Read back a result written by `save_result`.
    pub fn load_result(path: &Path) -> AppResult<GenerationResult> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::InvalidInput(format!("{}: not a saved result ({e})", path.display()))
        })
    }
}

/// `Kitchen_List_<DD-MM-YYYY>_<MealType>.<ext>`
pub fn file_name(date: &str, meal_type: MealType, format: ExportFormat) -> String {
    format!(
        "Kitchen_List_{}_{}.{}",
        to_file_stamp(date),
        meal_type.as_str(),
        format.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderRow;
    use std::env;

    fn result_with(n: usize) -> GenerationResult {
        GenerationResult {
            orders: (0..n)
                .map(|i| OrderRow {
                    order_number: format!("ORD-{i}"),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn file_name_is_pure_function_of_date_and_meal() {
        assert_eq!(
            file_name("09/02/2026", MealType::Lunch, ExportFormat::Xlsx),
            "Kitchen_List_09-02-2026_Lunch.xlsx"
        );
        assert_eq!(
            file_name("09/02/2026", MealType::Dinner, ExportFormat::Csv),
            "Kitchen_List_09-02-2026_Dinner.csv"
        );
    }

    #[test]
    fn nothing_to_export_is_an_error() {
        assert!(matches!(
            ExportLogic::project(None, "09/02/2026", MealType::Lunch, ExportFormat::Xlsx),
            Err(AppError::NoDataToExport)
        ));
        let empty = result_with(0);
        assert!(matches!(
            ExportLogic::project(Some(&empty), "09/02/2026", MealType::Lunch, ExportFormat::Csv),
            Err(AppError::NoDataToExport)
        ));
    }

    #[test]
    fn projection_leaves_result_untouched() {
        let result = result_with(3);
        let before = result.clone();
        let export =
            ExportLogic::project(Some(&result), "09/02/2026", MealType::Lunch, ExportFormat::Json)
                .unwrap();

        assert_eq!(result, before);
        let v: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 3);
        assert_eq!(v[2]["Order Number"], "ORD-2");
    }

    #[test]
    fn write_puts_file_in_directory() {
        let mut dir = env::temp_dir();
        dir.push("rtiffin_export_write_test");
        fs::create_dir_all(&dir).unwrap();

        let export = ExportLogic::project(
            Some(&result_with(1)),
            "10/02/2026",
            MealType::Dinner,
            ExportFormat::Csv,
        )
        .unwrap();
        let path = ExportLogic::write(&export, &dir, true).unwrap();

        assert_eq!(path, dir.join("Kitchen_List_10-02-2026_Dinner.csv"));
        assert!(fs::read_to_string(&path).unwrap().contains("ORD-0"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_result_loads_back() {
        let mut path = env::temp_dir();
        path.push("rtiffin_saved_result_test.json");
        fs::remove_file(&path).ok();

        let mut result = result_with(2);
        result.summary.date = "09/02/2026".into();
        result.orders[1].notes = "extra dal".into();
        result.completed_orders = vec!["ORD-0".into()];

        ExportLogic::save_result(&result, &path, true).unwrap();
        assert_eq!(ExportLogic::load_result(&path).unwrap(), result);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let export = ExportLogic::project(
            Some(&result_with(1)),
            "10/02/2026",
            MealType::Lunch,
            ExportFormat::Json,
        )
        .unwrap();
        let missing = env::temp_dir().join("rtiffin_no_such_dir_for_export");
        fs::remove_dir_all(&missing).ok();
        assert!(ExportLogic::write(&export, &missing, true).is_err());
    }
}
