pub mod exporter;

pub use exporter::CsvExporter;
