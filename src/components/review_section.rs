use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::reviews::{
    self, format_review_date, RatingFilter, ReviewFeed, SortOrder, AVERAGE_RATING, TOTAL_REVIEWS,
};

fn average_stars(average: f64) -> Html {
    html! {
        <div class="stars">
            { for (0..5).map(|i| {
                let fill = reviews::star_fill_percent(average, i);
                html! {
                    <span class="star">
                        <i class="fas fa-star star-bg"></i>
                        <i
                            class="fas fa-star star-fg"
                            style={format!("clip-path: inset(0 {}% 0 0);", 100.0 - fill)}
                        ></i>
                    </span>
                }
            }) }
        </div>
    }
}

/// Review grid with the average header, rating filter, sort order and
/// client-side "Carregue mais" pagination.
#[function_component(ReviewSection)]
pub fn review_section() -> Html {
    let feed = use_state(ReviewFeed::new);
    let filter = use_state(|| RatingFilter::All);
    let sort = use_state(|| SortOrder::Latest);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(RatingFilter::from_label(&select.value()));
        })
    };
    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort.set(SortOrder::from_label(&select.value()));
        })
    };
    let on_load_more = {
        let feed = feed.clone();
        Callback::from(move |_| feed.set(feed.load_more()))
    };

    let page = reviews::review_page();
    let visible = reviews::visible_reviews(&page, *filter, *sort, feed.shown());

    let section_css = r#"
        .review-section {
            background: #fff;
            border-radius: 0.5rem;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
            padding: 1.5rem;
            margin-bottom: 2rem;
        }
        .review-header {
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
            margin-bottom: 1.5rem;
        }
        .review-average {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .review-average-number {
            font-size: 3rem;
            font-weight: 700;
            color: #1f2937;
        }
        .star { position: relative; display: inline-block; width: 1.2em; }
        .star-bg { color: #d1d5db; }
        .star-fg { color: #facc15; position: absolute; left: 0; }
        .star-filled { color: #facc15; }
        .review-total { color: #4b5563; font-size: 0.95rem; }
        .write-review {
            background: #eab308;
            color: #fff;
            border: none;
            border-radius: 0.5rem;
            padding: 0.6rem 1.5rem;
            font-weight: 600;
        }
        .write-review:hover { background: #ca8a04; }
        .review-toolbar {
            display: flex;
            flex-wrap: wrap;
            align-items: center;
            justify-content: space-between;
            gap: 0.75rem;
            padding-bottom: 1.5rem;
            margin-bottom: 1.5rem;
            border-bottom: 1px solid #e5e7eb;
            font-size: 0.85rem;
            color: #4b5563;
        }
        .review-toolbar select {
            border: 1px solid #d1d5db;
            border-radius: 0.5rem;
            padding: 0.5rem 0.75rem;
            font-size: 0.85rem;
            background: #fff;
            margin-left: 0.5rem;
        }
        .review-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 1rem;
            margin-bottom: 1.5rem;
        }
        @media (min-width: 640px) { .review-grid { grid-template-columns: repeat(2, 1fr); } }
        @media (min-width: 1024px) { .review-grid { grid-template-columns: repeat(4, 1fr); } }
        .review-card {
            border: 1px solid #e5e7eb;
            border-radius: 0.5rem;
            padding: 1rem;
        }
        .review-card:hover { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07); }
        .review-card-head {
            display: flex;
            gap: 0.5rem;
            margin-bottom: 0.75rem;
        }
        .review-card-head img {
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 9999px;
            object-fit: cover;
            background: #e5e7eb;
        }
        .review-name {
            font-weight: 600;
            font-size: 0.85rem;
            color: #1f2937;
        }
        .review-date { font-size: 0.75rem; color: #6b7280; }
        .review-comment {
            font-size: 0.85rem;
            color: #374151;
            line-height: 1.5;
            margin-top: 0.5rem;
        }
        .load-more-row { display: flex; justify-content: center; }
        .load-more {
            border: 1px solid #d1d5db;
            background: #fff;
            color: #374151;
            border-radius: 0.5rem;
            padding: 0.6rem 2rem;
            font-size: 0.95rem;
        }
        .load-more:hover { background: #f9fafb; }
        .review-empty {
            text-align: center;
            color: #6b7280;
            font-size: 0.9rem;
            padding: 2rem 0;
        }
    "#;

    html! {
        <div class="review-section">
            <style>{section_css}</style>
            <div class="review-header">
                <div class="review-average">
                    <span class="review-average-number">{ format!("{AVERAGE_RATING:.1}") }</span>
                    { average_stars(AVERAGE_RATING) }
                    <span class="review-total">{ format!("{TOTAL_REVIEWS}+ Avaliações") }</span>
                </div>
                <button class="write-review">{"Escreva um comentário"}</button>
            </div>

            <div class="review-toolbar">
                <p>{ format!("Mostrando 1 - {} de {}+ Comentários", visible.len(), TOTAL_REVIEWS) }</p>
                <div>
                    <select onchange={on_filter_change}>
                        { for RatingFilter::LABELS.iter().map(|label| html! {
                            <option selected={filter.label() == *label}>{ *label }</option>
                        }) }
                    </select>
                    <select onchange={on_sort_change}>
                        { for SortOrder::LABELS.iter().map(|label| html! {
                            <option selected={sort.label() == *label}>{ *label }</option>
                        }) }
                    </select>
                </div>
            </div>

            if visible.is_empty() {
                <p class="review-empty">{"Nenhuma avaliação com essa nota ainda."}</p>
            } else {
                <div class="review-grid">
                    { for visible.iter().map(|review| html! {
                        <div class="review-card" key={review.id.to_string()}>
                            <div class="review-card-head">
                                <img src={review.avatar} alt={review.name} />
                                <div>
                                    <p class="review-name">{ review.name }</p>
                                    <p class="review-date">{ format_review_date(review.posted) }</p>
                                </div>
                            </div>
                            <div>
                                { for (0..review.rating).map(|_| html! {
                                    <i class="fas fa-star star-filled"></i>
                                }) }
                            </div>
                            <p class="review-comment">{ review.comment }</p>
                        </div>
                    }) }
                </div>
            }

            if feed.can_load_more() {
                <div class="load-more-row">
                    <button class="load-more" onclick={on_load_more}>{"Carregue mais"}</button>
                </div>
            }
        </div>
    }
}
