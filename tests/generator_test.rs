use sprout::config::Config;
use sprout::error::Error;
use sprout::generators::{
    find_module_files, generate_templates, list_options, non_page_file_manipulation,
    process_component_request, process_page_request, process_tabs_request,
};
use sprout::request::{ArtifactKind, GeneratorRequest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const APP_MODULE: &str = r#"import { NgModule } from '@angular/core';
import { HomePage } from './pages/home/home';

@NgModule({
  declarations: [
    HomePage,
  ],
  imports: [],
})
export class AppModule {}
"#;

fn test_config(root: &Path) -> Config {
    Config {
        components_dir: root.join("src/components"),
        directives_dir: root.join("src/directives"),
        pages_dir: root.join("src/pages"),
        pipes_dir: root.join("src/pipes"),
        providers_dir: root.join("src/providers"),
        template_dir: root.join("templates"),
        module_suffix: ".module.ts".to_string(),
    }
}

fn write_template(root: &Path, kind: &str, file: &str, content: &str) {
    let dir = root.join("templates").join(kind);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

fn seed_templates(root: &Path) {
    write_template(root, "component", "component.ts.tmpl", "export class $CLASSNAME {}\n");
    write_template(root, "component", "html.tmpl", "<div>$SUPPLIEDNAME</div>\n");
    write_template(root, "component", "scss.tmpl", "$FILENAME {\n}\n");
    write_template(root, "component", "spec.ts.tmpl", "describe('$CLASSNAME', () => {});\n");

    write_template(root, "page", "ts.tmpl", "export class $CLASSNAME {}\n");
    write_template(root, "page", "html.tmpl", "<h1>$SUPPLIEDNAME</h1>\n");
    write_template(root, "page", "scss.tmpl", "page-$FILENAME {\n}\n");
    write_template(root, "page", "module.ts.tmpl", "export class $CLASSNAMEModule {}\n");
    write_template(root, "page", "spec.ts.tmpl", "describe('$CLASSNAME', () => {});\n");

    write_template(root, "tabs", "ts.tmpl", "export class $CLASSNAME {}\n");
    write_template(root, "tabs", "html.tmpl", "<nav>$SUPPLIEDNAME</nav>\n");
}

fn seed_app_module(root: &Path) -> std::path::PathBuf {
    let module_path = root.join("src/app/app.module.ts");
    fs::create_dir_all(module_path.parent().unwrap()).unwrap();
    fs::write(&module_path, APP_MODULE).unwrap();
    module_path
}

#[test]
fn test_list_options_marks_only_tabs_as_multiple() {
    let options = list_options();
    assert_eq!(options.len(), 6);
    for option in options {
        assert_eq!(option.multiple, option.kind == ArtifactKind::Tabs);
    }
}

#[test_log::test(tokio::test)]
async fn test_component_generation_writes_minimal_file_set() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let module_path = seed_app_module(temp.path());

    let created = process_component_request(&config, "foo", &module_path).await.unwrap();

    let destination = temp.path().join("src/components/foo");
    let mut names: Vec<String> = created
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["foo.component.ts", "foo.html", "foo.scss"]);
    assert_eq!(
        fs::read_to_string(destination.join("foo.component.ts")).unwrap(),
        "export class FooComponent {}\n"
    );
    assert_eq!(fs::read_to_string(destination.join("foo.html")).unwrap(), "<div>foo</div>\n");
}

#[test_log::test(tokio::test)]
async fn test_component_generation_registers_class_in_module() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let module_path = seed_app_module(temp.path());

    process_component_request(&config, "foo", &module_path).await.unwrap();

    let module_text = fs::read_to_string(&module_path).unwrap();
    assert!(module_text.contains("import { FooComponent } from '../components/foo';"));
    assert!(module_text.contains("    HomePage,\n    FooComponent,\n"));
}

#[test_log::test(tokio::test)]
async fn test_rerunning_component_generation_leaves_module_unchanged() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let module_path = seed_app_module(temp.path());

    process_component_request(&config, "foo", &module_path).await.unwrap();
    let after_first = fs::read_to_string(&module_path).unwrap();

    let created = process_component_request(&config, "foo", &module_path).await.unwrap();
    let after_second = fs::read_to_string(&module_path).unwrap();

    assert_eq!(after_first, after_second);
    // Template output is still materialized on the second run
    assert!(!created.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_page_generation_includes_module_and_excludes_spec() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());

    let created = process_page_request(&config, "about").await.unwrap();

    let destination = temp.path().join("src/pages/about");
    let mut names: Vec<String> = created
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["about.html", "about.module.ts", "about.scss", "about.ts"]);
    assert_eq!(
        fs::read_to_string(destination.join("about.module.ts")).unwrap(),
        "export class AboutPageModule {}\n"
    );
}

#[test_log::test(tokio::test)]
async fn test_page_generation_with_spec_opted_in() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let request = GeneratorRequest::new(ArtifactKind::Page, "about").with_spec(true);

    let created = generate_templates(&config, &request).await.unwrap();

    assert!(created.iter().any(|p| p.ends_with("about.spec.ts")));
}

#[test_log::test(tokio::test)]
async fn test_generation_fails_without_templates() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());

    match process_page_request(&config, "about").await {
        Err(Error::FileSystem { path, .. }) => {
            assert_eq!(path, temp.path().join("templates/page"))
        }
        other => panic!("expected FileSystem error, got {:?}", other),
    }
}

#[test_log::test(tokio::test)]
async fn test_tabs_generation_materializes_container_and_tab_pages() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let request = GeneratorRequest::new(ArtifactKind::Tabs, "tabs-root");
    let tabs = vec!["home".to_string(), "settings".to_string()];

    let created = process_tabs_request(&config, &request, &tabs).await.unwrap();

    let pages = temp.path().join("src/pages");
    assert!(pages.join("tabs-root/tabs-root.ts").exists());
    assert!(pages.join("tabs-root/tabs-root.html").exists());
    assert!(pages.join("home/home.ts").exists());
    assert!(pages.join("home/home.module.ts").exists());
    assert!(pages.join("settings/settings.ts").exists());
    assert!(created.len() >= 8);
    assert_eq!(
        fs::read_to_string(pages.join("tabs-root/tabs-root.ts")).unwrap(),
        "export class TabsRootTabs {}\n"
    );
}

#[test_log::test(tokio::test)]
async fn test_non_page_flow_mutates_module_before_materializing() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());
    let module_path = seed_app_module(temp.path());
    let request = GeneratorRequest::new(ArtifactKind::Component, "nav-bar");

    non_page_file_manipulation(&config, &request, &module_path).await.unwrap();

    let module_text = fs::read_to_string(&module_path).unwrap();
    assert!(module_text.contains("import { NavBarComponent } from '../components/nav-bar';"));
    assert!(module_text.contains("NavBarComponent,"));
    assert!(temp.path().join("src/components/nav-bar/nav-bar.component.ts").exists());
}

#[test_log::test(tokio::test)]
async fn test_find_module_files_matches_suffix_per_kind() {
    let temp = TempDir::new().unwrap();
    seed_templates(temp.path());
    let config = test_config(temp.path());

    process_page_request(&config, "about").await.unwrap();
    process_page_request(&config, "contact").await.unwrap();

    let found = find_module_files(&config, &[ArtifactKind::Page]).unwrap();
    assert_eq!(
        found,
        vec![
            temp.path().join("src/pages/about/about.module.ts"),
            temp.path().join("src/pages/contact/contact.module.ts"),
        ]
    );
}

#[test]
fn test_find_module_files_skips_missing_directories() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());

    let found = find_module_files(&config, &[ArtifactKind::Component, ArtifactKind::Page]).unwrap();
    assert!(found.is_empty());
}
