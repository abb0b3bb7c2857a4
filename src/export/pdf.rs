//! Paginated PDF rendering of the history table.
//!
//! Objects are wired by hand: one catalog, one pages tree and one
//! Helvetica font shared by every page, with a fresh content stream per
//! page. The layout is landscape A4 with a title on the first page, a
//! filled header band and a bordered grid that flows across pages.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::errors::AppResult;
use crate::export::model::{HistoryExport, get_headers, rows_to_table};

// Landscape A4.
const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;
const MARGIN: f32 = 40.0;
const ROW_H: f32 = 16.0;

const BODY_SIZE: f32 = 8.0;
const HEADER_SIZE: f32 = 8.0;
const TITLE_SIZE: f32 = 18.0;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    next_id: i32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            current_content_id: None,
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);
        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_row(content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
        let mut x = MARGIN;
        for (i, cell) in cells.iter().enumerate() {
            Self::draw_text(content, x + 3.0, y + 4.5, size, cell);
            content.save_state();
            content.set_stroke_rgb(0.7, 0.7, 0.7);
            content.rect(x, y, widths[i], ROW_H);
            content.stroke();
            content.restore_state();
            x += widths[i];
        }
    }

    /// Size columns by header and cell text, shrinking the lot when it
    /// overflows the printable width.
    fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.2).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len() as f32 * 4.8);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = PAGE_W - 2.0 * MARGIN;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }
        widths
    }

    fn draw_header_band(content: &mut Content, y: f32, widths: &[f32], headers: &[String]) {
        let band_w: f32 = widths.iter().sum();

        content.save_state();
        // Dodger blue band, white caption text.
        content.set_fill_rgb(0.12, 0.56, 1.0);
        content.rect(MARGIN, y, band_w, ROW_H);
        content.fill_nonzero();
        content.restore_state();

        content.save_state();
        content.set_fill_rgb(1.0, 1.0, 1.0);
        Self::draw_row(content, y, widths, headers, HEADER_SIZE);
        content.restore_state();
    }

    /// Multipage table with a title on the first page. An empty row set
    /// still produces one page with the title and the header band.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = Self::column_widths(headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();

            let mut y = PAGE_H - MARGIN;
            if page_idx == 1 {
                Self::draw_text(&mut content, MARGIN, y - TITLE_SIZE, TITLE_SIZE, title);
                y -= TITLE_SIZE + 14.0;
            }

            y -= ROW_H;
            Self::draw_header_band(&mut content, y, &widths, &header_cells);
            y -= ROW_H;

            let mut consumed = 0;
            for row in remaining {
                if y < MARGIN {
                    break;
                }
                Self::draw_row(&mut content, y, &widths, row, BODY_SIZE);
                y -= ROW_H;
                consumed += 1;
            }

            let label = format!("Page {}", page_idx);
            Self::draw_text(
                &mut content,
                PAGE_W - MARGIN - 50.0,
                MARGIN - 20.0,
                BODY_SIZE,
                &label,
            );

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            if remaining.is_empty() {
                break;
            }
            page_idx += 1;
        }
    }

    pub fn save(mut self, path: &Path) -> AppResult<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.clone());
        }

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Render history rows into a paginated landscape document.
pub fn write_pdf(path: &Path, title: &str, rows: &[HistoryExport]) -> AppResult<()> {
    let mut manager = PdfManager::new();
    manager.write_table(title, &get_headers(), &rows_to_table(rows));
    manager.save(path)
}
