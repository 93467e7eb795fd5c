// positivador-core/src/domain/payload.rs
//
// Dashboard payload. Serialized field names are the ones the dashboard reads.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::calendar::MonthKey;
use crate::domain::normalize::Flag;
use crate::domain::targets::{Metric, TargetSynthesizer};

/// advisor -> month -> value
pub type MetricMatrix<T> = BTreeMap<String, BTreeMap<MonthKey, T>>;

/// One advisor in one monthly table, as aggregated by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "assessor")]
    pub advisor: String,
    #[serde(rename = "mes")]
    pub month: MonthKey,
    #[serde(rename = "ativacoes")]
    pub activations: i64,
    #[serde(rename = "captacao")]
    pub fundraising: f64,
    #[serde(rename = "receita")]
    pub revenue: f64,
}

/// One client row of one monthly table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    #[serde(rename = "assessor")]
    pub advisor: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "ativou_em_m")]
    pub activated: Flag,
    #[serde(rename = "evadiu_em_m")]
    pub churned: Flag,
    #[serde(rename = "net_em_m")]
    pub net_flow: f64,
    #[serde(rename = "receita_no_mes")]
    pub revenue: f64,
    #[serde(rename = "captacao_liquida_em_m")]
    pub fundraising: f64,
    #[serde(rename = "mes")]
    pub month: MonthKey,
    #[serde(rename = "mes_nome")]
    pub month_label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Targets {
    #[serde(rename = "ativacoes")]
    pub activations: BTreeMap<String, i64>,
    #[serde(rename = "captacao")]
    pub fundraising: BTreeMap<String, f64>,
    #[serde(rename = "receita")]
    pub revenue: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    pub series: Vec<String>,
    #[serde(rename = "meses")]
    pub months: Vec<MonthKey>,
    #[serde(rename = "ativacoes")]
    pub activations: MetricMatrix<i64>,
    #[serde(rename = "captacao")]
    pub fundraising: MetricMatrix<f64>,
    #[serde(rename = "receita")]
    pub revenue: MetricMatrix<f64>,
    #[serde(rename = "metas")]
    pub targets: Targets,
    #[serde(rename = "tabela")]
    pub summary: Vec<SummaryRow>,
    #[serde(rename = "detalhes")]
    pub details: Vec<DetailRow>,
}

/// Accumulates table extracts, then densifies and synthesizes targets.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    activations: MetricMatrix<i64>,
    fundraising: MetricMatrix<f64>,
    revenue: MetricMatrix<f64>,
    summary: Vec<SummaryRow>,
    details: Vec<DetailRow>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contributions for an (advisor, month) already seen are added, never replaced.
    pub fn add_summary(&mut self, row: SummaryRow) {
        *self
            .activations
            .entry(row.advisor.clone())
            .or_default()
            .entry(row.month)
            .or_default() += row.activations;
        *self
            .fundraising
            .entry(row.advisor.clone())
            .or_default()
            .entry(row.month)
            .or_default() += row.fundraising;
        *self
            .revenue
            .entry(row.advisor.clone())
            .or_default()
            .entry(row.month)
            .or_default() += row.revenue;
        self.summary.push(row);
    }

    pub fn add_detail(&mut self, row: DetailRow) {
        self.details.push(row);
    }

    pub fn build(self) -> Payload {
        let months: BTreeSet<MonthKey> = months_of(&self.activations)
            .chain(months_of(&self.fundraising))
            .chain(months_of(&self.revenue))
            .collect();
        let advisors: BTreeSet<String> = self
            .activations
            .keys()
            .chain(self.fundraising.keys())
            .chain(self.revenue.keys())
            .cloned()
            .collect();

        let activations = densify(&self.activations, &advisors, &months);
        let fundraising = densify(&self.fundraising, &advisors, &months);
        let revenue = densify(&self.revenue, &advisors, &months);

        let mut targets = Targets::default();
        for advisor in &advisors {
            let total_a: i64 = activations[advisor].values().sum();
            let total_c: f64 = fundraising[advisor].values().sum();
            let total_r: f64 = revenue[advisor].values().sum();
            targets.activations.insert(
                advisor.clone(),
                TargetSynthesizer::activation_target(advisor, total_a),
            );
            targets.fundraising.insert(
                advisor.clone(),
                TargetSynthesizer::amount_target(advisor, Metric::Fundraising, total_c),
            );
            targets.revenue.insert(
                advisor.clone(),
                TargetSynthesizer::amount_target(advisor, Metric::Revenue, total_r),
            );
        }

        Payload {
            series: advisors.into_iter().collect(),
            months: months.into_iter().collect(),
            activations,
            fundraising,
            revenue,
            targets,
            summary: self.summary,
            details: self.details,
        }
    }
}

fn months_of<T>(matrix: &MetricMatrix<T>) -> impl Iterator<Item = MonthKey> + '_ {
    matrix.values().flat_map(|by_month| by_month.keys().copied())
}

/// Rectangular copy of `sparse` over `advisors × months`; missing cells are zero.
pub fn densify<T: Copy + Default>(
    sparse: &MetricMatrix<T>,
    advisors: &BTreeSet<String>,
    months: &BTreeSet<MonthKey>,
) -> MetricMatrix<T> {
    advisors
        .iter()
        .map(|advisor| {
            let row = sparse.get(advisor);
            let dense = months
                .iter()
                .map(|month| {
                    let value = row.and_then(|r| r.get(month)).copied().unwrap_or_default();
                    (*month, value)
                })
                .collect();
            (advisor.clone(), dense)
        })
        .collect()
}

/// Advisor listing order: fewer characters first, then lexicographic.
pub fn sort_advisor_ids(ids: &mut [String]) {
    ids.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });
}
