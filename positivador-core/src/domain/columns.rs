// positivador-core/src/domain/columns.rs
//
// Column naming drifts from one monthly table to the next (accents, spaces,
// abbreviations). Each semantic field carries its known spellings plus a
// substring used as a last resort.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    Activation,
    Churn,
    Fundraising,
    Revenue,
    NetFlow,
    Client,
}

impl SemanticField {
    pub const ALL: [SemanticField; 6] = [
        SemanticField::Activation,
        SemanticField::Churn,
        SemanticField::Fundraising,
        SemanticField::Revenue,
        SemanticField::NetFlow,
        SemanticField::Client,
    ];

    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            SemanticField::Activation => {
                &["ativou_em_m", "Ativou em M?", "ativou_em_mes", "ativou_m"]
            }
            SemanticField::Churn => &["evadiu_em_m", "Evadiu em M?", "evadiu_em_mes", "evadiu_m"],
            SemanticField::Fundraising => &[
                "captacao_liquida_em_m",
                "Captação Líquida em M",
                "captacao_em_m",
                "captacao_liq_m",
            ],
            SemanticField::Revenue => {
                &["receita_no_mes", "Receita no Mês", "receita_mes", "receita_em_m"]
            }
            SemanticField::NetFlow => &["net_em_m", "Net em M", "net_m", "soma_net_em_m"],
            SemanticField::Client => &["cliente", "id_cliente", "cod_cliente"],
        }
    }

    pub fn fallback_token(&self) -> &'static str {
        match self {
            SemanticField::Activation => "ativ",
            SemanticField::Churn => "evad",
            SemanticField::Fundraising => "capta",
            SemanticField::Revenue => "receit",
            SemanticField::NetFlow => "net",
            SemanticField::Client => "client",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticField::Activation => "activation",
            SemanticField::Churn => "churn",
            SemanticField::Fundraising => "fundraising",
            SemanticField::Revenue => "revenue",
            SemanticField::NetFlow => "net_flow",
            SemanticField::Client => "client",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Exact(String),
    Fallback(String),
}

impl Resolution {
    pub fn column(&self) -> &str {
        match self {
            Resolution::Exact(c) | Resolution::Fallback(c) => c,
        }
    }

    pub fn into_column(self) -> String {
        match self {
            Resolution::Exact(c) | Resolution::Fallback(c) => c,
        }
    }
}

/// Candidates are tried in order, each against every column (case-insensitive).
/// Then the first column, in ordinal order, containing `fallback` wins.
pub fn resolve_column(
    table: &str,
    columns: &[String],
    candidates: &[&str],
    fallback: &str,
) -> Result<Resolution, DomainError> {
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        if let Some(col) = columns.iter().find(|c| c.to_lowercase() == wanted) {
            return Ok(Resolution::Exact(col.clone()));
        }
    }

    let token = fallback.to_lowercase();
    if let Some(col) = columns.iter().find(|c| c.to_lowercase().contains(&token)) {
        return Ok(Resolution::Fallback(col.clone()));
    }

    Err(DomainError::ColumnNotFound {
        table: table.to_string(),
        candidate: candidates.first().copied().unwrap_or(fallback).to_string(),
    })
}

/// Actual column names backing the semantic fields of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnBinding {
    pub advisor: String,
    pub client: String,
    pub activation: String,
    pub churn: String,
    pub net_flow: String,
    pub revenue: String,
    pub fundraising: String,
}

impl ColumnBinding {
    /// Resolves the six drifting fields. The advisor column is taken as-is.
    /// Returns the binding and the fields that needed the substring fallback.
    pub fn resolve(
        table: &str,
        columns: &[String],
        advisor_column: &str,
    ) -> Result<(Self, Vec<(SemanticField, String)>), DomainError> {
        let mut fallbacks = Vec::new();
        let mut pick = |field: SemanticField| -> Result<String, DomainError> {
            let res = resolve_column(table, columns, field.candidates(), field.fallback_token())?;
            if let Resolution::Fallback(col) = &res {
                fallbacks.push((field, col.clone()));
            }
            Ok(res.into_column())
        };

        let binding = ColumnBinding {
            activation: pick(SemanticField::Activation)?,
            churn: pick(SemanticField::Churn)?,
            fundraising: pick(SemanticField::Fundraising)?,
            revenue: pick(SemanticField::Revenue)?,
            net_flow: pick(SemanticField::NetFlow)?,
            client: pick(SemanticField::Client)?,
            advisor: advisor_column.to_string(),
        };
        Ok((binding, fallbacks))
    }

    pub fn column_for(&self, field: SemanticField) -> &str {
        match field {
            SemanticField::Activation => &self.activation,
            SemanticField::Churn => &self.churn,
            SemanticField::Fundraising => &self.fundraising,
            SemanticField::Revenue => &self.revenue,
            SemanticField::NetFlow => &self.net_flow,
            SemanticField::Client => &self.client,
        }
    }
}
