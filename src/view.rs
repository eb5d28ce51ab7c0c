//! Console listing of stored records.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::db::{StoredRecord, COLUMN_NAMES};

/// Shown for NULL columns, so they stay distinct from empty strings.
pub const NULL_MARKER: &str = "NULL";

/// Build an aligned table of `records`, one row each, every column shown.
pub fn records_table(records: &[StoredRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(COLUMN_NAMES.to_vec());

    for record in records {
        table.add_row(
            record
                .values()
                .into_iter()
                .map(|value| Cell::new(value.unwrap_or(NULL_MARKER))),
        );
    }

    table
}

/// Write the table of `records` to `out`.
pub fn render_records<W: Write>(out: &mut W, records: &[StoredRecord]) -> io::Result<()> {
    writeln!(out, "{}", records_table(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(tipo: Option<&str>, dia: Option<&str>) -> StoredRecord {
        StoredRecord {
            rowid: 1,
            tipo: tipo.map(str::to_string),
            cnpj: None,
            mofg: None,
            situacao: None,
            data_do_evento: None,
            grupo_de_tributo: None,
            codigo_da_receita: None,
            periodicidade: None,
            ano: None,
            mes: None,
            dia: dia.map(str::to_string),
            ordem_do_estabelecimento: None,
            cnpj_cei: None,
            reservado_1: None,
            valor_do_debito: Some("00000000012345".to_string()),
            balanco_de_reducao: None,
            debito_dividido_em_quotas: None,
            reservado_2: None,
            debito_de_scp_inc: None,
            reservado_3: None,
            delimitador_de_registro: None,
        }
    }

    #[test]
    fn test_render_contains_header_and_values() {
        let mut out = Vec::new();
        render_records(&mut out, &[stored(Some("R10"), Some(""))]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tipo"));
        assert!(text.contains("Delimitador_de_Registro"));
        assert!(text.contains("R10"));
        assert!(text.contains("00000000012345"));
        assert!(text.contains(NULL_MARKER));
    }

    #[test]
    fn test_table_has_one_row_per_record() {
        let table = records_table(&[stored(Some("R10"), None), stored(None, Some("15"))]);
        assert_eq!(table.row_iter().count(), 2);
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let mut out = Vec::new();
        render_records(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Valor_do_Debito"));
    }
}
