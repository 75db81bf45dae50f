use dioxus::prelude::*;

use crate::core::bundle::{Cell, DataTable, RowStyle};

fn row_class(style: RowStyle) -> &'static str {
    match style {
        RowStyle::Plain => "",
        RowStyle::Highlight => "highlight",
        RowStyle::Total => "total",
    }
}

fn cell_class(cell: &Cell) -> &'static str {
    if cell.is_numeric() {
        "number-cell"
    } else {
        ""
    }
}

#[component]
pub fn DataTableView(table: DataTable) -> Element {
    rsx! {
        div { class: "data-table-wrap",
            table { class: "data-table",
                thead {
                    tr {
                        for (idx, column) in table.columns.iter().enumerate() {
                            th { key: "{idx}", "{column}" }
                        }
                    }
                }
                tbody {
                    for (row_idx, row) in table.rows.iter().enumerate() {
                        tr { key: "{row_idx}", class: row_class(row.style),
                            for (cell_idx, cell) in row.cells.iter().enumerate() {
                                td { key: "{cell_idx}", class: cell_class(cell),
                                    if let Cell::Label(text) = cell {
                                        strong { "{text}" }
                                    } else {
                                        {cell.display()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
