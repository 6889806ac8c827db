/// Trait для типов, которые можно выгрузить в CSV
pub trait CsvExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Значения ячеек в порядке заголовков
    fn to_csv_row(&self) -> Vec<String>;
}

/// Формат денежных сумм и показателей в выгрузке
pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}
