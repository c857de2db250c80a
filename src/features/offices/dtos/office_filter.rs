use serde::{Deserialize, Serialize};

use crate::features::offices::models::BranchOffice;

/// Client-side narrowing of an already loaded office list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeFilter {
    /// Case-insensitive substring of name, address1, branch or province name
    #[serde(default)]
    pub search: String,
    /// Exact province name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Exact branch name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl OfficeFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Default::default()
        }
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into()).filter(|p: &String| !p.is_empty());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into()).filter(|b: &String| !b.is_empty());
        self
    }

    /// Drop the province and branch selection, keeping the search term
    pub fn clear_selection(&mut self) {
        self.province = None;
        self.branch = None;
    }

    pub fn matches(&self, office: &BranchOffice) -> bool {
        self.matches_term(office, &self.search.to_lowercase())
    }

    /// `term` is the search text, already lower-cased
    fn matches_term(&self, office: &BranchOffice, term: &str) -> bool {
        let matches_search = [
            &office.name,
            &office.address1,
            &office.branch_name,
            &office.province_name,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term));

        let matches_province = self
            .province
            .as_ref()
            .map_or(true, |p| office.province_name == *p);
        let matches_branch = self
            .branch
            .as_ref()
            .map_or(true, |b| office.branch_name == *b);

        matches_search && matches_province && matches_branch
    }

    pub fn apply<'a>(&self, offices: &'a [BranchOffice]) -> Vec<&'a BranchOffice> {
        let term = self.search.to_lowercase();
        offices
            .iter()
            .filter(|office| self.matches_term(office, &term))
            .collect()
    }
}
