//! Client-side join of learning results with their owning users.

use std::collections::HashMap;

use tracing::warn;

use super::{LearningResult, ResultTarget, User};

/// A learning result joined with its user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedLearningResult {
    pub result: LearningResult,
    pub user: User,
}

/// Rows produced by [`join_results`] plus the ids that fell back to the
/// placeholder user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinOutcome {
    pub rows: Vec<CombinedLearningResult>,
    pub unmatched_user_ids: Vec<i64>,
}

/// Join `results` against `users`.
///
/// For the aggregate target every row is matched on its own `userId`
/// (placeholder id: `userId` or 0). For a single-user target every row belongs
/// to the selected user (placeholder id: the selected id). Unmatched ids are
/// kept as placeholders and logged, never dropped.
pub fn join_results(
    results: Vec<LearningResult>,
    target: ResultTarget,
    users: &[User],
) -> JoinOutcome {
    let by_id: HashMap<i64, &User> = users.iter().map(|u| (u.id, u)).collect();
    let mut unmatched_user_ids = Vec::new();

    let mut resolve = |id: i64| -> User {
        match by_id.get(&id) {
            Some(user) => (*user).clone(),
            None => {
                if !unmatched_user_ids.contains(&id) {
                    unmatched_user_ids.push(id);
                }
                User::placeholder(id)
            }
        }
    };

    let rows = match target {
        ResultTarget::AllUsers => results
            .into_iter()
            .map(|result| {
                let user = resolve(result.user_id.unwrap_or(0));
                CombinedLearningResult { result, user }
            })
            .collect(),
        ResultTarget::User(selected) => {
            if results.is_empty() {
                Vec::new()
            } else {
                let user = resolve(selected);
                results
                    .into_iter()
                    .map(|result| CombinedLearningResult {
                        result,
                        user: user.clone(),
                    })
                    .collect()
            }
        }
    };

    if !unmatched_user_ids.is_empty() {
        warn!(
            target_filter = %target,
            unmatched = ?unmatched_user_ids,
            "learning results reference users missing from the user list"
        );
    }

    JoinOutcome {
        rows,
        unmatched_user_ids,
    }
}
