use serde::Serialize;

/// Flat row for history exports, one per completed trip. Every column is
/// already rendered; "-" stands in for anything missing.
#[derive(Serialize, Clone, Debug)]
pub struct HistoryExport {
    pub license_plate: String,
    pub sub_branch: String,
    pub driver_name: String,
    pub status: String,
    pub departure_time: String,
    pub return_time: String,
    pub departure_km: String,
    pub return_km: String,
    pub distance: String,
    pub duration: String,
    pub purpose: String,
}

/// Header per CSV / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "No. Polisi",
        "Sub Cabang",
        "Nama Sopir",
        "Status",
        "Waktu Keluar (Trip)",
        "Waktu Masuk (Trip)",
        "KM Keluar",
        "KM Masuk",
        "Jarak (KM)",
        "Durasi",
        "Tujuan",
    ]
}

pub(crate) fn row_to_cells(r: &HistoryExport) -> Vec<String> {
    vec![
        r.license_plate.clone(),
        r.sub_branch.clone(),
        r.driver_name.clone(),
        r.status.clone(),
        r.departure_time.clone(),
        r.return_time.clone(),
        r.departure_km.clone(),
        r.return_km.clone(),
        r.distance.clone(),
        r.duration.clone(),
        r.purpose.clone(),
    ]
}

pub(crate) fn rows_to_table(rows: &[HistoryExport]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}
