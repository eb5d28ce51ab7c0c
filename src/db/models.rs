//! Diesel models for the `dados` table

use diesel::prelude::*;

use crate::db::schema::dados;
use crate::serialization::LoadedRecord;

/// A row to insert. Absent fields are `None` and stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable)]
#[diesel(table_name = dados)]
pub struct NewRecord {
    pub tipo: Option<String>,
    pub cnpj: Option<String>,
    pub mofg: Option<String>,
    pub situacao: Option<String>,
    pub data_do_evento: Option<String>,
    pub grupo_de_tributo: Option<String>,
    pub codigo_da_receita: Option<String>,
    pub periodicidade: Option<String>,
    pub ano: Option<String>,
    pub mes: Option<String>,
    pub dia: Option<String>,
    pub ordem_do_estabelecimento: Option<String>,
    pub cnpj_cei: Option<String>,
    pub reservado_1: Option<String>,
    pub valor_do_debito: Option<String>,
    pub balanco_de_reducao: Option<String>,
    pub debito_dividido_em_quotas: Option<String>,
    pub reservado_2: Option<String>,
    pub debito_de_scp_inc: Option<String>,
    pub reservado_3: Option<String>,
    pub delimitador_de_registro: Option<String>,
}

impl NewRecord {
    /// Map a record's fields onto the table columns by field name.
    /// Keys with no matching column are ignored.
    pub fn from_fields(fields: &LoadedRecord) -> Self {
        let get = |name: &str| fields.get(name).cloned().flatten();

        NewRecord {
            tipo: get("Tipo"),
            cnpj: get("CNPJ"),
            mofg: get("MOFG"),
            situacao: get("Situacao"),
            data_do_evento: get("Data_do_Evento"),
            grupo_de_tributo: get("Grupo_de_Tributo"),
            codigo_da_receita: get("Codigo_da_Receita"),
            periodicidade: get("Periodicidade"),
            ano: get("Ano"),
            mes: get("Mes"),
            dia: get("Dia"),
            ordem_do_estabelecimento: get("Ordem_do_Estabelecimento"),
            cnpj_cei: get("CNPJ_CEI"),
            reservado_1: get("Reservado_1"),
            valor_do_debito: get("Valor_do_Debito"),
            balanco_de_reducao: get("Balanco_de_Reducao"),
            debito_dividido_em_quotas: get("Debito_dividido_em_quotas"),
            reservado_2: get("Reservado_2"),
            debito_de_scp_inc: get("Debito_de_SCP_INC"),
            reservado_3: get("Reservado_3"),
            delimitador_de_registro: get("Delimitador_de_Registro"),
        }
    }
}

/// A stored row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = dados)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoredRecord {
    pub rowid: i64,
    pub tipo: Option<String>,
    pub cnpj: Option<String>,
    pub mofg: Option<String>,
    pub situacao: Option<String>,
    pub data_do_evento: Option<String>,
    pub grupo_de_tributo: Option<String>,
    pub codigo_da_receita: Option<String>,
    pub periodicidade: Option<String>,
    pub ano: Option<String>,
    pub mes: Option<String>,
    pub dia: Option<String>,
    pub ordem_do_estabelecimento: Option<String>,
    pub cnpj_cei: Option<String>,
    pub reservado_1: Option<String>,
    pub valor_do_debito: Option<String>,
    pub balanco_de_reducao: Option<String>,
    pub debito_dividido_em_quotas: Option<String>,
    pub reservado_2: Option<String>,
    pub debito_de_scp_inc: Option<String>,
    pub reservado_3: Option<String>,
    pub delimitador_de_registro: Option<String>,
}

impl StoredRecord {
    /// Column values in [`COLUMN_NAMES`](crate::db::schema::COLUMN_NAMES) order.
    pub fn values(&self) -> [Option<&str>; 21] {
        [
            self.tipo.as_deref(),
            self.cnpj.as_deref(),
            self.mofg.as_deref(),
            self.situacao.as_deref(),
            self.data_do_evento.as_deref(),
            self.grupo_de_tributo.as_deref(),
            self.codigo_da_receita.as_deref(),
            self.periodicidade.as_deref(),
            self.ano.as_deref(),
            self.mes.as_deref(),
            self.dia.as_deref(),
            self.ordem_do_estabelecimento.as_deref(),
            self.cnpj_cei.as_deref(),
            self.reservado_1.as_deref(),
            self.valor_do_debito.as_deref(),
            self.balanco_de_reducao.as_deref(),
            self.debito_dividido_em_quotas.as_deref(),
            self.reservado_2.as_deref(),
            self.debito_de_scp_inc.as_deref(),
            self.reservado_3.as_deref(),
            self.delimitador_de_registro.as_deref(),
        ]
    }

    /// Value of the column named `name`, `None` for NULL or an unknown name.
    pub fn get(&self, name: &str) -> Option<&str> {
        crate::db::schema::COLUMN_NAMES
            .iter()
            .position(|column| *column == name)
            .and_then(|idx| self.values()[idx])
    }
}
