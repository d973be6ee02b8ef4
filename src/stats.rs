use crate::rank::Ranking;

/// Summary of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogResults {
    pub unique_ip_address_count: usize,
    pub top_urls: Ranking,
    pub top_ip_addresses: Ranking,
}
