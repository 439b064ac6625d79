//! JSON bodies served by the mock course API.

use serde_json::{Value, json};

/// Builds a review listing envelope with `count` five-star reviews.
///
/// Review ids continue across pages so appended pages are distinguishable.
pub(crate) fn review_page_json(count: u32, page: u32, pages: u32) -> Value {
    let first_id = page.saturating_sub(1).saturating_mul(10);
    let reviews: Vec<Value> = (1..=count)
        .map(|offset| {
            let id = first_id.saturating_add(offset);
            json!({
                "id": id,
                "rating": 5,
                "content": format!("Review {id}"),
                "created_at": "2025-03-01T10:00:00",
                "user": {"id": id, "username": format!("student{id}"), "avatar_url": null}
            })
        })
        .collect();

    json!({
        "success": true,
        "data": {
            "reviews": reviews,
            "statistics": {"average_rating": 5.0, "total_reviews": count, "rated_reviews": count},
            "rating_distribution": [{"rating": 5, "count": count}]
        },
        "pagination": {
            "page": page,
            "per_page": 10,
            "pages": pages,
            "has_prev": page > 1,
            "has_next": page < pages
        }
    })
}

/// Builds a course detail envelope.
pub(crate) fn course_json(title: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "id": 42,
            "title": title,
            "cover_images": ["cover.jpg"],
            "average_rating": 4.5,
            "total_reviews": 2,
            "instructor": {"id": 1, "name": "Dr. Aho"}
        }
    })
}
