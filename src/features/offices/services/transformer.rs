//! Flattens the province -> branch -> office tree returned by the PCP API.

use crate::features::offices::models::{BranchOffice, Coordinates};
use crate::modules::pcp::types::{Branch, BranchOfficeApiResponse, OfficeSite, Province};
use crate::shared::parsing::parse_coordinate;

/// One `BranchOffice` per office site, in province/branch/office order as received.
///
/// A logical failure (`status == false`) or a missing `data` list yields an
/// empty vector rather than an error.
pub fn transform_to_branch_offices(response: &BranchOfficeApiResponse) -> Vec<BranchOffice> {
    if !response.status {
        return Vec::new();
    }
    let Some(provinces) = response.data.as_ref() else {
        return Vec::new();
    };

    provinces
        .iter()
        .flat_map(|province| {
            province.branches.iter().flat_map(move |branch| {
                branch
                    .office_sites
                    .iter()
                    .map(move |office| to_branch_office(province, branch, office))
            })
        })
        .collect()
}

fn to_branch_office(province: &Province, branch: &Branch, office: &OfficeSite) -> BranchOffice {
    let latitude = parse_coordinate(&office.latitude);
    let longitude = parse_coordinate(&office.longitude);

    BranchOffice {
        id: office.office_site_id.clone(),
        name: office.office_name.clone(),
        branch_id: branch.branch_id.clone(),
        branch_name: branch.branch_name.clone(),
        province_id: province.province_id.clone(),
        province_name: province.province_name.clone(),
        address1: office.address1.clone(),
        address2: office.address2.clone(),
        address3: office.address3.clone(),
        full_address: full_address(office),
        latitude,
        longitude,
        coordinates: Coordinates {
            lat: latitude,
            lng: longitude,
        },
    }
}

/// Address lines joined with ", ", skipping blank lines and the "-" placeholder.
pub fn full_address(office: &OfficeSite) -> String {
    [&office.address1, &office.address2, &office.address3]
        .into_iter()
        .filter(|part| {
            let trimmed = part.trim();
            !trimmed.is_empty() && trimmed != "-"
        })
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
