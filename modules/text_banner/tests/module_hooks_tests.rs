//! Hook boundary tests: lifecycle, render hooks and the admin action

mod common;

use common::{form, print_test_header, request, FlakyStore, EN, FR};
use std::sync::Arc;
use text_banner::contract::{AdminOutcome, Hook, LanguageId, LanguageSettings, ShopHost};
use text_banner::domain::NoOpEventPublisher;
use text_banner::infra::{InMemorySettingsStore, StaticShopHost};
use text_banner::{Config, TextBannerModule, SETTINGS_UPDATED_MESSAGE};

fn module_with(
    store: Arc<dyn text_banner::domain::SettingsStore>,
    host: Arc<StaticShopHost>,
) -> TextBannerModule {
    TextBannerModule::with_store(Config::default(), store, Arc::new(NoOpEventPublisher), host)
}

fn two_language_host() -> Arc<StaticShopHost> {
    Arc::new(StaticShopHost::new(vec![EN, FR]))
}

#[tokio::test]
async fn test_install_registers_hooks_and_seeds_languages() {
    print_test_header(
        "test_install_registers_hooks_and_seeds_languages",
        "Install attaches to every hook and initializes each shop language",
    );
    let store = Arc::new(InMemorySettingsStore::new());
    let host = two_language_host();
    let module = module_with(store.clone(), host.clone());

    assert!(module.install().await);

    assert_eq!(host.registered_hooks(), Hook::ALL.to_vec());
    // 3 keys per language plus 3 shared colors
    assert_eq!(store.len(), 9);
}

#[tokio::test]
async fn test_install_fails_when_store_is_down() {
    let store = FlakyStore::new();
    store.fail(true);
    let module = module_with(store, two_language_host());

    assert!(!module.install().await);
}

#[tokio::test]
async fn test_uninstall_removes_everything() {
    let store = Arc::new(InMemorySettingsStore::new());
    let module = module_with(store.clone(), two_language_host());
    assert!(module.install().await);
    module
        .admin_content(Some(&form(&[("text_1", "Hi"), ("enabled", "1")])))
        .await;
    module.display_top(&request(EN)).await;
    assert!(!module.service().cache().is_empty());

    assert!(module.uninstall().await);

    assert!(store.is_empty());
    assert!(module.service().cache().is_empty());
    assert_eq!(module.display_top(&request(EN)).await, "");
}

#[tokio::test]
async fn test_uninstall_reports_store_failure() {
    let store = FlakyStore::new();
    let module = module_with(store.clone(), two_language_host());
    store.fail(true);

    assert!(!module.uninstall().await);
}

#[tokio::test]
async fn test_language_added_seeds_defaults() {
    let store = Arc::new(InMemorySettingsStore::new());
    let host = two_language_host();
    let module = module_with(store.clone(), host.clone());
    assert!(module.install().await);

    let de = LanguageId::new(3);
    host.add_language(de);
    assert!(module.on_language_added(de).await);

    assert_eq!(store.len(), 12);
    assert_eq!(
        module.service().load_for_language(de).await.unwrap(),
        LanguageSettings::default()
    );
}

#[tokio::test]
async fn test_header_registers_stylesheet_only_when_enabled() {
    print_test_header(
        "test_header_registers_stylesheet_only_when_enabled",
        "displayHeader emits styling and the stylesheet for enabled languages only",
    );
    let host = two_language_host();
    let module = module_with(Arc::new(InMemorySettingsStore::new()), host.clone());
    module
        .admin_content(Some(&form(&[
            ("enabled_1", "1"),
            ("backgroundColor", "#fff"),
            ("foregroundColor", "#000"),
        ])))
        .await;

    let disabled = module.display_header(&request(FR)).await;
    assert_eq!(disabled, "");
    assert!(host.stylesheets().is_empty());

    let enabled = module.display_header(&request(EN)).await;
    assert!(enabled.starts_with("<!-- Text Banner Styling --><style>"));
    assert_eq!(enabled.matches(";}").count(), 2);
    assert_eq!(
        host.stylesheets(),
        vec![(
            "modules/textbanner/textbanner.css".to_string(),
            "all".to_string()
        )]
    );
}

#[tokio::test]
async fn test_top_and_banner_hooks_render_same_markup() {
    let module = module_with(
        Arc::new(InMemorySettingsStore::new()),
        two_language_host(),
    );
    module
        .admin_content(Some(&form(&[
            ("link_1", "sale.html"),
            ("text_1", "Summer sale"),
            ("enabled", "1"),
        ])))
        .await;

    let top = module.display_top(&request(EN)).await;
    assert!(top.contains(r#"href="sale.html""#));
    assert!(top.contains("Summer sale"));
    assert_eq!(module.display_banner(&request(EN)).await, top);

    // Enabled but empty for FR: container without a link
    let fr = module.display_top(&request(FR)).await;
    assert!(fr.contains("textbanner-container"));
    assert!(!fr.contains("<a "));
}

#[tokio::test]
async fn test_render_hooks_degrade_to_empty_on_store_failure() {
    print_test_header(
        "test_render_hooks_degrade_to_empty_on_store_failure",
        "A broken store never breaks page rendering",
    );
    let store = FlakyStore::new();
    let host = two_language_host();
    let module = module_with(store.clone(), host.clone());
    store.fail(true);

    assert_eq!(module.display_header(&request(EN)).await, "");
    assert_eq!(module.display_top(&request(EN)).await, "");
    assert_eq!(module.display_banner(&request(EN)).await, "");
    assert!(!module.on_language_added(EN).await);
    assert!(host.stylesheets().is_empty());
}

#[tokio::test]
async fn test_admin_outcomes() {
    print_test_header(
        "test_admin_outcomes",
        "Admin action reports idle, saved and failed submissions",
    );
    let store = FlakyStore::new();
    let module = module_with(store.clone(), two_language_host());

    assert_eq!(module.admin_content(None).await, AdminOutcome::Idle);

    assert_eq!(
        module
            .admin_content(Some(&form(&[("text_1", "Hello")])))
            .await,
        AdminOutcome::Saved(SETTINGS_UPDATED_MESSAGE.to_string())
    );

    match module
        .admin_content(Some(&form(&[("enabled", "perhaps")])))
        .await
    {
        AdminOutcome::Failed(message) => assert!(message.contains("enabled")),
        other => panic!("Expected Failed outcome, got {other:?}"),
    }

    store.fail(true);
    assert!(matches!(
        module.admin_content(Some(&form(&[("text_1", "x")]))).await,
        AdminOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn test_admin_form_values_degrade_to_defaults() {
    let store = FlakyStore::new();
    let host = two_language_host();
    let module = module_with(store.clone(), host.clone());
    module
        .admin_content(Some(&form(&[("text_2", "Bonjour"), ("foregroundColor", "red")])))
        .await;

    let values = module.admin_form_values().await;
    assert_eq!(values.languages[&FR].text, "Bonjour");
    assert_eq!(values.colors.foreground, "red");

    store.fail(true);
    let values = module.admin_form_values().await;
    assert_eq!(values.languages.len(), host.languages().await.unwrap().len());
    assert!(values
        .languages
        .values()
        .all(|settings| *settings == LanguageSettings::default()));
    assert_eq!(values.colors.foreground, "");
}

#[tokio::test]
async fn test_client_shares_module_state() {
    let module = module_with(
        Arc::new(InMemorySettingsStore::new()),
        two_language_host(),
    );
    let client = module.client();

    client
        .save_submission(&form(&[("text_2", "Soldes"), ("enabled", "1")]), &[EN, FR])
        .await
        .unwrap();

    let snapshot = client.snapshot(FR).await.unwrap();
    assert_eq!(snapshot.settings.text, "Soldes");
    assert!(snapshot.settings.enabled);
    assert!(module.display_top(&request(FR)).await.contains("Soldes"));

    client.teardown().await.unwrap();
    assert_eq!(
        client.load_for_language(FR).await.unwrap(),
        LanguageSettings::default()
    );
}
