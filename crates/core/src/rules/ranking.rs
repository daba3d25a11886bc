// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::params::{RankedSubmission, SetNextForQualificationParams};
use qualification_domain::{
    Qualification, QualificationStatusDetails, QualificationSystemMethod, ReductionCriteria,
    ValidationError,
};
use std::cmp::Ordering;

/// A qualification paired with the submission it was created for.
struct Candidate<'a> {
    qualification: &'a Qualification,
    submission: &'a RankedSubmission,
}

fn by_scoring_then_date(left: &Candidate<'_>, right: &Candidate<'_>) -> Ordering {
    left.qualification
        .scoring
        .cmp(&right.qualification.scoring)
        .then_with(|| left.submission.date.cmp(&right.submission.date))
}

fn by_date(left: &Candidate<'_>, right: &Candidate<'_>) -> Ordering {
    left.submission.date.cmp(&right.submission.date)
}

/// Ranks the qualifications of the given submissions and marks the first
/// one as awaiting.
///
/// Candidates are ordered by scoring (lowest first) and then submission date
/// when the tender reduces by scoring, evaluates automatically, declares no
/// criteria of its own and every candidate carries a scoring. Otherwise they
/// are ordered by submission date alone.
///
/// # Returns
///
/// The ranked candidates. The first element is the updated qualification
/// that is next for qualification; the rest are unchanged.
///
/// # Errors
///
/// * `VR.COM-7.13.1` when nothing is stored for the process
/// * `VR.COM-7.13.2` when a submission has no qualification
pub fn rank_qualifications(
    params: &SetNextForQualificationParams,
    stored: &[Qualification],
) -> Result<Vec<Qualification>, ValidationError> {
    if stored.is_empty() {
        return Err(ValidationError::QualificationsNotFoundOnRankQualifications {
            cpid: params.cpid.clone(),
            ocid: params.ocid.clone(),
        });
    }

    let mut candidates: Vec<Candidate<'_>> = params
        .submissions
        .iter()
        .map(|submission| {
            stored
                .iter()
                .find(|qualification| qualification.related_submission == submission.id)
                .map(|qualification| Candidate {
                    qualification,
                    submission,
                })
                .ok_or_else(|| ValidationError::RelatedSubmissionNotEqualOnRankQualifications {
                    submission_id: submission.id.clone(),
                })
        })
        .collect::<Result<_, _>>()?;

    let ranks_by_scoring: bool = params.other_criteria.reduction_criteria
        == ReductionCriteria::Scoring
        && params.other_criteria.qualification_system_method
            == QualificationSystemMethod::Automated
        && params.criteria.is_empty()
        && candidates
            .iter()
            .all(|candidate| candidate.qualification.scoring.is_some());

    if ranks_by_scoring {
        candidates.sort_by(by_scoring_then_date);
    } else {
        candidates.sort_by(by_date);
    }

    let mut ranked: Vec<Qualification> = candidates
        .into_iter()
        .map(|candidate| candidate.qualification.clone())
        .collect();
    if let Some(next) = ranked.first_mut() {
        next.status_details = Some(QualificationStatusDetails::Awaiting);
    }
    Ok(ranked)
}
