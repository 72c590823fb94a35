// End-to-end refresh over a temp settings file. Only the CodeArtifact
// exchange is stubbed out; reader, writer and pipeline run for real.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::config::Configuration;
    use crate::error::{Error, Result};
    use crate::refresh::refresh_token;
    use crate::source::TokenSource;

    struct StaticSource(&'static str);

    impl TokenSource for StaticSource {
        async fn fetch_token(&self, _domain: &str, _domain_owner: &str) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    struct FailingSource;

    impl TokenSource for FailingSource {
        async fn fetch_token(&self, _domain: &str, _domain_owner: &str) -> Result<String> {
            Err(Error::TokenFetch("simulated outage".to_owned()))
        }
    }

    const SETTINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<settings>
  <servers>
    <server>
      <id>codeartifact</id>
      <username>aws</username>
      <password>OLD123</password>
    </server>
  </servers>
</settings>
"#;

    fn write_settings(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("settings.xml");
        fs::write(&path, SETTINGS).unwrap();
        path
    }

    fn config(settings: PathBuf) -> Configuration {
        Configuration {
            domain: "my-domain".to_owned(),
            domain_owner: "123456789012".to_owned(),
            server: "codeartifact".to_owned(),
            settings,
        }
    }

    #[tokio::test]
    async fn replaces_token_and_preserves_surrounding_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir);

        let replaced = refresh_token(&config(path.clone()), &StaticSource("NEW456"))
            .await
            .unwrap();

        assert_eq!(replaced, 1);
        let got = fs::read_to_string(&path).unwrap();
        assert!(got.contains("<password>NEW456</password>"));
        assert_eq!(got, SETTINGS.replace("OLD123", "NEW456"));
    }

    #[tokio::test]
    async fn missing_settings_file_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.xml");

        let err = refresh_token(&config(path.clone()), &StaticSource("NEW456"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::FileRead { .. }));
        assert!(!path.exists(), "no partial write may appear");
    }

    #[tokio::test]
    async fn fetch_failure_leaves_settings_untouched() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir);

        let err = refresh_token(&config(path.clone()), &FailingSource)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TokenFetch(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), SETTINGS);
    }

    #[tokio::test]
    async fn unknown_server_id_is_reported_by_name() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir);

        let mut cfg = config(path);
        cfg.server = "release-repo".to_owned();
        let err = refresh_token(&cfg, &StaticSource("NEW456")).await.unwrap_err();

        assert!(err.to_string().contains("release-repo"));
    }

    #[tokio::test]
    async fn rerun_with_same_token_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_settings(&dir);

        refresh_token(&config(path.clone()), &StaticSource("NEW456"))
            .await
            .unwrap();
        let after_first = fs::read(&path).unwrap();

        refresh_token(&config(path.clone()), &StaticSource("NEW456"))
            .await
            .unwrap();

        assert_eq!(fs::read(&path).unwrap(), after_first);
    }
}
