//! Table definition for stored records.

diesel::table! {
    /// One row per decoded record. `rowid` is SQLite's implicit row id.
    dados (rowid) {
        rowid -> BigInt,
        #[sql_name = "Tipo"]
        tipo -> Nullable<Text>,
        #[sql_name = "CNPJ"]
        cnpj -> Nullable<Text>,
        #[sql_name = "MOFG"]
        mofg -> Nullable<Text>,
        #[sql_name = "Situacao"]
        situacao -> Nullable<Text>,
        #[sql_name = "Data_do_Evento"]
        data_do_evento -> Nullable<Text>,
        #[sql_name = "Grupo_de_Tributo"]
        grupo_de_tributo -> Nullable<Text>,
        #[sql_name = "Codigo_da_Receita"]
        codigo_da_receita -> Nullable<Text>,
        #[sql_name = "Periodicidade"]
        periodicidade -> Nullable<Text>,
        #[sql_name = "Ano"]
        ano -> Nullable<Text>,
        #[sql_name = "Mes"]
        mes -> Nullable<Text>,
        #[sql_name = "Dia"]
        dia -> Nullable<Text>,
        #[sql_name = "Ordem_do_Estabelecimento"]
        ordem_do_estabelecimento -> Nullable<Text>,
        #[sql_name = "CNPJ_CEI"]
        cnpj_cei -> Nullable<Text>,
        #[sql_name = "Reservado_1"]
        reservado_1 -> Nullable<Text>,
        #[sql_name = "Valor_do_Debito"]
        valor_do_debito -> Nullable<Text>,
        #[sql_name = "Balanco_de_Reducao"]
        balanco_de_reducao -> Nullable<Text>,
        #[sql_name = "Debito_dividido_em_quotas"]
        debito_dividido_em_quotas -> Nullable<Text>,
        #[sql_name = "Reservado_2"]
        reservado_2 -> Nullable<Text>,
        #[sql_name = "Debito_de_SCP_INC"]
        debito_de_scp_inc -> Nullable<Text>,
        #[sql_name = "Reservado_3"]
        reservado_3 -> Nullable<Text>,
        #[sql_name = "Delimitador_de_Registro"]
        delimitador_de_registro -> Nullable<Text>,
    }
}

/// Column names of `dados`, in table order, excluding `rowid`.
pub const COLUMN_NAMES: [&str; 21] = [
    "Tipo",
    "CNPJ",
    "MOFG",
    "Situacao",
    "Data_do_Evento",
    "Grupo_de_Tributo",
    "Codigo_da_Receita",
    "Periodicidade",
    "Ano",
    "Mes",
    "Dia",
    "Ordem_do_Estabelecimento",
    "CNPJ_CEI",
    "Reservado_1",
    "Valor_do_Debito",
    "Balanco_de_Reducao",
    "Debito_dividido_em_quotas",
    "Reservado_2",
    "Debito_de_SCP_INC",
    "Reservado_3",
    "Delimitador_de_Registro",
];

/// Build the `CREATE TABLE IF NOT EXISTS` statement for `dados`.
pub fn create_table_sql() -> String {
    let columns: Vec<String> = COLUMN_NAMES
        .iter()
        .map(|name| format!("    {} TEXT", name))
        .collect();
    format!("CREATE TABLE IF NOT EXISTS dados (\n{}\n)", columns.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn test_columns_match_r10_layout() {
        let layout = Layout::r10().unwrap();
        let fields: Vec<_> = layout.field_names().collect();
        assert_eq!(fields, COLUMN_NAMES.to_vec());
    }

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS dados ("));
        assert!(sql.contains("    Tipo TEXT,\n"));
        assert!(sql.ends_with("    Delimitador_de_Registro TEXT\n)"));
    }
}
