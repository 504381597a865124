//! Customer review data, pagination and the filter/sort controls.
//!
//! The seed below is one page of a much larger dataset: the page displays
//! `TOTAL_REVIEWS` and `AVERAGE_RATING` as authored marketing constants,
//! independent of the entries actually shipped with the bundle.

use chrono::NaiveDate;

pub const TOTAL_REVIEWS: usize = 1427;
pub const AVERAGE_RATING: f64 = 4.8;

/// How many reviews are revealed initially and per "Carregue mais" click.
pub const PAGE_STEP: usize = 10;

#[derive(Clone, PartialEq, Debug)]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: &'static str,
    pub avatar: &'static str,
    pub posted: NaiveDate,
    /// "This helped me" votes, drives the `Mais úteis` ordering.
    pub helpful: u32,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The review page bundled with the site.
pub fn review_page() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "Ricardo Nogueir...",
            rating: 5,
            comment: "Os resultados são rapidíssimos, em segundos, como prometido. Ótima aquisição",
            avatar: "/avatars/review-01.jpg",
            posted: date(2025, 10, 15),
            helpful: 41,
        },
        Review {
            id: 2,
            name: "Eduardo Barbosa",
            rating: 5,
            comment: "Produto eficiente, entrega rápida e rastreamento disponível, tudo conforme prometido",
            avatar: "/avatars/review-02.jpg",
            posted: date(2025, 10, 12),
            helpful: 18,
        },
        Review {
            id: 3,
            name: "Larissa Fernand...",
            rating: 5,
            comment: "Design moderno e acabamento em ABS resistente, parece robusto e durável",
            avatar: "/avatars/review-03.jpg",
            posted: date(2025, 10, 10),
            helpful: 27,
        },
        Review {
            id: 4,
            name: "Lucas Pereira",
            rating: 5,
            comment: "Sem agulhas, fácil de usar, e ainda acompanha a frequência cardíaca. Recomendo para quem busca praticidade",
            avatar: "/avatars/review-04.jpg",
            posted: date(2025, 10, 8),
            helpful: 63,
        },
        Review {
            id: 5,
            name: "Bruna Santos",
            rating: 5,
            comment: "Sensores avançados que realmente funcionam e a precisão de 99,9% é uma das melhores que já vi",
            avatar: "/avatars/review-05.jpg",
            posted: date(2025, 10, 5),
            helpful: 9,
        },
        Review {
            id: 6,
            name: "Juliana Ribeiro",
            rating: 5,
            comment: "Design portátil e tela digital de alta definição. Ideal para levar na bolsa e monitorar a glicemia em qualquer lugar",
            avatar: "/avatars/review-06.jpg",
            posted: date(2025, 10, 3),
            helpful: 22,
        },
        Review {
            id: 7,
            name: "Mariana Oliveir...",
            rating: 5,
            comment: "Adorei o aplicativo sincronizado, consigo acompanhar meu histórico de leituras de forma muito mais organizada",
            avatar: "/avatars/review-07.jpg",
            posted: date(2025, 10, 1),
            helpful: 15,
        },
        Review {
            id: 8,
            name: "Fernando Lima",
            rating: 5,
            comment: "Alta precisão e rapidez. Uso diariamente e os resultados têm sido confiáveis e consistentes",
            avatar: "/avatars/review-08.jpg",
            posted: date(2025, 9, 28),
            helpful: 34,
        },
        Review {
            id: 9,
            name: "Carlos Eduardo ...",
            rating: 5,
            comment: "Excelente dispositivo, mede glicose, oxigênio e frequência cardíaca em um único aparelho. Super prático",
            avatar: "/avatars/review-09.jpg",
            posted: date(2025, 9, 25),
            helpful: 48,
        },
        Review {
            id: 10,
            name: "Ana Beatriz Sil...",
            rating: 5,
            comment: "Fiquei impressionada com a tecnologia sem agulhas, realmente elimina o desconforto das picadas e oferece resultados rápidos",
            avatar: "/avatars/review-10.jpg",
            posted: date(2025, 9, 22),
            helpful: 11,
        },
        Review {
            id: 11,
            name: "Pedro Henrique",
            rating: 5,
            comment: "Produto de excelente qualidade, chegou rápido e bem embalado. Recomendo!",
            avatar: "/avatars/review-11.jpg",
            posted: date(2025, 9, 20),
            helpful: 7,
        },
        Review {
            id: 12,
            name: "Camila Souza",
            rating: 5,
            comment: "Muito satisfeita com a compra. O aparelho é preciso e fácil de usar.",
            avatar: "/avatars/review-12.jpg",
            posted: date(2025, 9, 18),
            helpful: 29,
        },
    ]
}

/// Client-side pagination window over the declared review total.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ReviewFeed {
    shown: usize,
}

impl ReviewFeed {
    pub fn new() -> Self {
        Self { shown: PAGE_STEP }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Reveal one more page. Capped at the declared total.
    pub fn load_more(&self) -> Self {
        Self {
            shown: (self.shown + PAGE_STEP).min(TOTAL_REVIEWS),
        }
    }

    /// The "Carregue mais" control hides once the window covers the total.
    pub fn can_load_more(&self) -> bool {
        self.shown < TOTAL_REVIEWS
    }
}

impl Default for ReviewFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RatingFilter {
    All,
    Stars(u8),
}

impl RatingFilter {
    pub const LABELS: [&'static str; 6] = [
        "Todos",
        "5 estrelas",
        "4 estrelas",
        "3 estrelas",
        "2 estrelas",
        "1 estrela",
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "5 estrelas" => Self::Stars(5),
            "4 estrelas" => Self::Stars(4),
            "3 estrelas" => Self::Stars(3),
            "2 estrelas" => Self::Stars(2),
            "1 estrela" => Self::Stars(1),
            _ => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Stars(5) => "5 estrelas",
            Self::Stars(4) => "4 estrelas",
            Self::Stars(3) => "3 estrelas",
            Self::Stars(2) => "2 estrelas",
            Self::Stars(_) => "1 estrela",
        }
    }

    fn matches(&self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Stars(stars) => review.rating == *stars,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SortOrder {
    Latest,
    Oldest,
    MostHelpful,
}

impl SortOrder {
    pub const LABELS: [&'static str; 3] = ["Últimas", "Mais antigas", "Mais úteis"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Mais antigas" => Self::Oldest,
            "Mais úteis" => Self::MostHelpful,
            _ => Self::Latest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Últimas",
            Self::Oldest => "Mais antigas",
            Self::MostHelpful => "Mais úteis",
        }
    }
}

/// Apply the rating filter, the sort order and the pagination window, in
/// that order.
pub fn visible_reviews(
    reviews: &[Review],
    filter: RatingFilter,
    sort: SortOrder,
    shown: usize,
) -> Vec<Review> {
    let mut selected: Vec<Review> = reviews
        .iter()
        .filter(|review| filter.matches(review))
        .cloned()
        .collect();
    match sort {
        SortOrder::Latest => selected.sort_by(|a, b| b.posted.cmp(&a.posted)),
        SortOrder::Oldest => selected.sort_by(|a, b| a.posted.cmp(&b.posted)),
        SortOrder::MostHelpful => selected.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
    }
    selected.truncate(shown);
    selected
}

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// `2025-10-15` -> `"15 de outubro de 2025"`.
pub fn format_review_date(posted: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} de {} de {}",
        posted.day(),
        MONTHS_PT[posted.month0() as usize],
        posted.year()
    )
}

/// Fill fraction (0-100%) of the `star_index`-th star when rendering a
/// fractional average, e.g. 4.8 fills four stars fully and the fifth 80%.
pub fn star_fill_percent(average: f64, star_index: usize) -> f64 {
    (average - star_index as f64).clamp(0.0, 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_holds_one_page_of_twelve() {
        let page = review_page();
        assert_eq!(page.len(), 12);
        assert!(page.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn feed_starts_at_ten_and_grows_by_ten() {
        let feed = ReviewFeed::new();
        assert_eq!(feed.shown(), 10);
        assert_eq!(feed.load_more().shown(), 20);
        assert_eq!(feed.load_more().load_more().shown(), 30);
    }

    #[test]
    fn load_more_control_hides_at_the_declared_total() {
        let mut feed = ReviewFeed::new();
        while feed.can_load_more() {
            feed = feed.load_more();
        }
        assert_eq!(feed.shown(), TOTAL_REVIEWS);
        assert!(!feed.can_load_more());
    }

    #[test]
    fn latest_sort_puts_newest_first() {
        let visible = visible_reviews(&review_page(), RatingFilter::All, SortOrder::Latest, 12);
        assert_eq!(visible[0].id, 1);
        assert!(visible.windows(2).all(|w| w[0].posted >= w[1].posted));
    }

    #[test]
    fn oldest_sort_puts_oldest_first() {
        let visible = visible_reviews(&review_page(), RatingFilter::All, SortOrder::Oldest, 12);
        assert_eq!(visible[0].id, 12);
        assert!(visible.windows(2).all(|w| w[0].posted <= w[1].posted));
    }

    #[test]
    fn helpful_sort_orders_by_votes() {
        let visible =
            visible_reviews(&review_page(), RatingFilter::All, SortOrder::MostHelpful, 12);
        assert_eq!(visible[0].id, 4);
        assert!(visible.windows(2).all(|w| w[0].helpful >= w[1].helpful));
    }

    #[test]
    fn rating_filter_keeps_only_matching_stars() {
        let five = visible_reviews(&review_page(), RatingFilter::Stars(5), SortOrder::Latest, 50);
        assert_eq!(five.len(), 12);
        let one = visible_reviews(&review_page(), RatingFilter::Stars(1), SortOrder::Latest, 50);
        assert!(one.is_empty());
    }

    #[test]
    fn pagination_window_truncates_the_list() {
        let visible = visible_reviews(&review_page(), RatingFilter::All, SortOrder::Latest, 10);
        assert_eq!(visible.len(), 10);
    }

    #[test]
    fn filter_labels_round_trip() {
        for label in RatingFilter::LABELS {
            assert_eq!(RatingFilter::from_label(label).label(), label);
        }
        for label in SortOrder::LABELS {
            assert_eq!(SortOrder::from_label(label).label(), label);
        }
    }

    #[test]
    fn review_dates_render_in_portuguese() {
        assert_eq!(
            format_review_date(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()),
            "15 de outubro de 2025"
        );
        assert_eq!(
            format_review_date(NaiveDate::from_ymd_opt(2025, 9, 28).unwrap()),
            "28 de setembro de 2025"
        );
    }

    #[test]
    fn average_of_4_8_fills_the_fifth_star_eighty_percent() {
        assert_eq!(star_fill_percent(4.8, 0), 100.0);
        assert_eq!(star_fill_percent(4.8, 3), 100.0);
        assert!((star_fill_percent(4.8, 4) - 80.0).abs() < 1e-9);
    }
}
