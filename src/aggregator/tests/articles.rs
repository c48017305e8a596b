use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::aggregator::NewsAggregator;
use crate::aggregator::test_helpers::create_test_aggregator;
use crate::error::Error;
use crate::types::NewArticle;

fn record(title: &str, link: &str, published_at: DateTime<Utc>) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        link: link.to_string(),
        published_at,
    }
}

/// Insert `count` articles one minute apart, oldest first. "Article 0" is the
/// oldest, so newest-first reads return "Article {count-1}" first.
async fn seed(aggregator: &NewsAggregator, count: usize) {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    for i in 0..count {
        aggregator
            .create_article(&record(
                &format!("Article {i}"),
                &format!("https://news.example/{i}"),
                base + Duration::minutes(i as i64),
            ))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_list_articles_on_empty_store() {
    let (aggregator, _temp) = create_test_aggregator().await;

    let articles = aggregator.list_articles().await.unwrap();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_list_articles_newest_first() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 3).await;

    let articles = aggregator.list_articles().await.unwrap();

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Article 2", "Article 1", "Article 0"]);
}

#[tokio::test]
async fn test_create_article_assigns_increasing_ids() {
    let (aggregator, _temp) = create_test_aggregator().await;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let first = aggregator
        .create_article(&record("First", "https://news.example/1", base))
        .await
        .unwrap();
    let second = aggregator
        .create_article(&record("Second", "https://news.example/2", base))
        .await
        .unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_create_article_bypasses_dedup() {
    let (aggregator, _temp) = create_test_aggregator().await;
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    // Direct creation does not consult the link index; both rows land
    aggregator
        .create_article(&record("Same story", "https://news.example/story", base))
        .await
        .unwrap();
    aggregator
        .create_article(&record("Same story", "https://news.example/story", base))
        .await
        .unwrap();

    assert_eq!(aggregator.list_articles().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_page_on_empty_store_is_out_of_range() {
    let (aggregator, _temp) = create_test_aggregator().await;

    let result = aggregator.page_articles(10, 1).await;

    match result {
        Err(Error::PageOutOfRange { page }) => assert_eq!(page, 1),
        other => panic!("expected page out of range, got {other:?}"),
    }
}

#[tokio::test]
async fn test_page_number_zero_rejected() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 5).await;

    assert!(matches!(
        aggregator.page_articles(10, 0).await,
        Err(Error::PageOutOfRange { page: 0 })
    ));
}

#[tokio::test]
async fn test_page_size_zero_rejected() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 5).await;

    assert!(matches!(
        aggregator.page_articles(0, 1).await,
        Err(Error::PageOutOfRange { page: 1 })
    ));
}

#[tokio::test]
async fn test_first_page_of_25() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 25).await;

    let page = aggregator.page_articles(10, 1).await.unwrap();

    assert_eq!(page.articles.len(), 10);
    assert_eq!(page.articles[0].title, "Article 24");
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.remaining_count, 15);
    assert_eq!(page.remaining_pages, 2);
}

#[tokio::test]
async fn test_middle_page_of_25() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 25).await;

    let page = aggregator.page_articles(10, 2).await.unwrap();

    assert_eq!(page.articles.len(), 10);
    assert_eq!(page.articles[0].title, "Article 14");
    assert_eq!(page.current_page, 2);
    assert_eq!(page.remaining_count, 5);
    assert_eq!(page.remaining_pages, 1);
}

#[tokio::test]
async fn test_last_partial_page_of_25() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 25).await;

    let page = aggregator.page_articles(10, 3).await.unwrap();

    assert_eq!(page.articles.len(), 5);
    assert_eq!(page.articles[4].title, "Article 0");
    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.remaining_count, 0);
    assert_eq!(page.remaining_pages, 0);
}

#[tokio::test]
async fn test_page_past_end_rejected() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 25).await;

    match aggregator.page_articles(10, 4).await {
        Err(Error::PageOutOfRange { page }) => assert_eq!(page, 4),
        other => panic!("expected page out of range, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exact_multiple_has_no_phantom_page() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 20).await;

    let page = aggregator.page_articles(10, 2).await.unwrap();
    assert_eq!(page.articles.len(), 10);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.remaining_count, 0);
    assert_eq!(page.remaining_pages, 0);

    assert!(matches!(
        aggregator.page_articles(10, 3).await,
        Err(Error::PageOutOfRange { page: 3 })
    ));
}

#[tokio::test]
async fn test_single_page_when_size_exceeds_total() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 3).await;

    let page = aggregator.page_articles(10, 1).await.unwrap();

    assert_eq!(page.articles.len(), 3);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.remaining_count, 0);
    assert_eq!(page.remaining_pages, 0);
}

#[tokio::test]
async fn test_page_accounting_is_consistent_across_sizes() {
    let (aggregator, _temp) = create_test_aggregator().await;
    seed(&aggregator, 25).await;

    for page_size in [1u32, 7, 10] {
        let mut seen_links = std::collections::HashSet::new();
        let total_pages = aggregator.page_articles(page_size, 1).await.unwrap().total_pages;

        for page_number in 1..=total_pages {
            let page = aggregator.page_articles(page_size, page_number).await.unwrap();
            let offset = u64::from(page_number - 1) * u64::from(page_size);

            // Rows before, in, and after this page always account for the full store
            assert_eq!(
                offset + page.articles.len() as u64 + page.remaining_count,
                25,
                "accounting broke at size {page_size} page {page_number}"
            );

            for article in &page.articles {
                assert!(seen_links.insert(article.link.clone()), "duplicate row across pages");
            }
        }

        assert_eq!(seen_links.len(), 25);
    }
}
