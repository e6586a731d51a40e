use checkout_client::application::registry::ClientRegistry;
use checkout_client::config::PublishableKey;
use checkout_client::domain::source::{
    CardBrand, ChargeAmount, FundingType, PaymentSource, SourceId, SourceToken,
};
use checkout_client::error::ClientError;

fn registry() -> ClientRegistry {
    ClientRegistry::new(Some(PublishableKey::new("pk_test_abc123")))
}

fn card(id: &str, last4: &str) -> PaymentSource {
    PaymentSource {
        id: SourceId::new(id),
        brand: CardBrand::Visa,
        last4: last4.to_string(),
        exp_month: 12,
        exp_year: 2030,
        funding: FundingType::Credit,
    }
}

#[tokio::test]
async fn test_attach_then_fetch_reflects_member_and_default() {
    let client = registry().get_or_create(None, None).unwrap();
    let attached = card("card_1", "4242");

    client
        .attach_source(&SourceToken::Card(attached.clone()))
        .await
        .unwrap();

    let listing = client.fetch_sources().await.unwrap();
    assert_eq!(listing.default_source_id, Some(attached.id.clone()));
    assert!(listing.sources.contains(&attached));
}

#[tokio::test]
async fn test_attaching_appends_in_order() {
    let client = registry().get_or_create(None, None).unwrap();
    let first = card("card_1", "4242");
    let second = card("card_2", "1111");

    client
        .attach_source(&SourceToken::Card(first.clone()))
        .await
        .unwrap();
    client
        .attach_source(&SourceToken::Card(second.clone()))
        .await
        .unwrap();

    let listing = client.fetch_sources().await.unwrap();
    assert_eq!(listing.sources, vec![first, second.clone()]);
    assert_eq!(listing.default_source_id, Some(second.id));
}

#[tokio::test]
async fn test_select_with_non_card_token_leaves_default_unchanged() {
    let client = registry().get_or_create(None, None).unwrap();
    let attached = card("card_1", "4242");
    client
        .attach_source(&SourceToken::Card(attached.clone()))
        .await
        .unwrap();

    client
        .select_default_source(&SourceToken::Opaque(SourceId::new("ba_1")))
        .await
        .unwrap();

    let listing = client.fetch_sources().await.unwrap();
    assert_eq!(listing.default_source_id, Some(attached.id));
}

#[tokio::test]
async fn test_charge_without_backend_completes_with_no_error() {
    let client = registry().get_or_create(None, None).unwrap();

    client
        .charge(
            &SourceToken::Opaque(SourceId::new("src_1")),
            ChargeAmount::new(999).unwrap(),
        )
        .await
        .unwrap();

    // No side effects on state either.
    let listing = client.fetch_sources().await.unwrap();
    assert!(listing.sources.is_empty());
    assert!(listing.default_source_id.is_none());
}

#[tokio::test]
async fn test_fetch_fails_closed_without_a_key() {
    let mut registry = ClientRegistry::new(None);
    let client = registry.get_or_create(None, None).unwrap();

    let err = client.fetch_sources().await.unwrap_err();
    assert!(matches!(err, ClientError::Configuration(_)));
    assert!(err.to_string().contains("publishable key"));
}
