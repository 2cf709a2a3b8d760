//! Dashboard metrics - Live aggregation over the store.
//!
//! Every figure is recomputed from the current collections on each call;
//! nothing here is cached or precomputed. Revenue counts quotes that have
//! actually gone out the door (`sent` or `accepted`); drafts and
//! rejections contribute nothing.

use crate::{
    entities::{LeadStage, QuoteStatus, lead, quote},
    errors::Result,
};
use chrono::{DateTime, Datelike, Utc};
use sea_orm::{DatabaseConnection, Iterable};
use serde::Serialize;
use std::collections::BTreeMap;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lead count for one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCount {
    /// The pipeline stage
    pub stage: LeadStage,
    /// Number of leads currently in it
    pub count: u64,
}

/// One month bucket of the trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPoint {
    /// Month label (e.g., "Jul 2024")
    pub label: String,
    /// Revenue from quotes created that month
    pub revenue: f64,
    /// Leads created that month
    pub leads: u64,
}

/// Dashboard snapshot summarizing the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesMetrics {
    /// Sum of sent and accepted quote totals
    pub total_revenue: f64,
    /// Same sum restricted to the current calendar month
    pub monthly_revenue: f64,
    /// Number of leads in the pipeline, any stage
    pub total_leads: u64,
    /// Closed-won leads over total leads, 0 when there are none
    pub conversion_rate: f64,
    /// Mean value of closed-won leads, 0 when there are none
    pub average_deal_size: f64,
    /// Lead count per stage; every stage is present, possibly at zero
    pub sales_by_stage: Vec<StageCount>,
    /// Chronological month buckets of revenue and lead intake
    pub monthly_trend: Vec<MonthPoint>,
}

fn counts_revenue(quote: &quote::Model) -> bool {
    matches!(quote.status, QuoteStatus::Sent | QuoteStatus::Accepted)
}

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Summarizes quotes and leads into a [`SalesMetrics`] snapshot.
///
/// `now` anchors the "current month" figure; passing it in keeps the
/// aggregation deterministic.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn summarize(
    quotes: &[quote::Model],
    leads: &[lead::Model],
    now: DateTime<Utc>,
) -> SalesMetrics {
    let counted: Vec<&quote::Model> = quotes.iter().filter(|q| counts_revenue(q)).collect();

    let total_revenue: f64 = counted.iter().map(|q| q.total).sum();
    let monthly_revenue: f64 = counted
        .iter()
        .filter(|q| same_month(q.created_at, now))
        .map(|q| q.total)
        .sum();

    let total_leads = leads.len() as u64;
    let won: Vec<&lead::Model> = leads
        .iter()
        .filter(|l| l.stage == LeadStage::ClosedWon)
        .collect();

    let conversion_rate = if leads.is_empty() {
        0.0
    } else {
        won.len() as f64 / leads.len() as f64
    };

    let average_deal_size = if won.is_empty() {
        0.0
    } else {
        won.iter().map(|l| l.value).sum::<f64>() / won.len() as f64
    };

    let sales_by_stage = LeadStage::iter()
        .map(|stage| StageCount {
            stage,
            count: leads.iter().filter(|l| l.stage == stage).count() as u64,
        })
        .collect();

    // (year, month) keys sort chronologically in the BTreeMap
    let mut buckets: BTreeMap<(i32, u32), (f64, u64)> = BTreeMap::new();
    for quote in &counted {
        let entry = buckets
            .entry((quote.created_at.year(), quote.created_at.month()))
            .or_default();
        entry.0 += quote.total;
    }
    for lead in leads {
        let entry = buckets
            .entry((lead.created_at.year(), lead.created_at.month()))
            .or_default();
        entry.1 += 1;
    }

    let monthly_trend = buckets
        .into_iter()
        .map(|((year, month), (revenue, lead_count))| MonthPoint {
            label: format!("{} {year}", MONTH_ABBREV[(month - 1) as usize]),
            revenue,
            leads: lead_count,
        })
        .collect();

    SalesMetrics {
        total_revenue,
        monthly_revenue,
        total_leads,
        conversion_rate,
        average_deal_size,
        sales_by_stage,
        monthly_trend,
    }
}

/// Reads the store and summarizes it into a [`SalesMetrics`] snapshot.
pub async fn compute_metrics(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<SalesMetrics> {
    let quotes = crate::core::quote::list_quotes(db).await?;
    let leads = crate::core::lead::list_leads(db).await?;
    Ok(summarize(&quotes, &leads, now))
}
