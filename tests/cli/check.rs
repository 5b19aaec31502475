use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_properties("home.title=Home\nhome.intro=Welcome\n")?;
    test.write_view(
        "home.jsp",
        r#"<h1><spring:message code="home.title"/></h1>
<p><spring:message code="home.intro"/></p>"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 template file against 2 message codes - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_missing_code() -> Result<()> {
    let test = CliTest::with_properties("a.b=A\nx.y=X\n")?;
    test.write_view(
        "sub/page.jsp",
        r#"<spring:message code="a.b"/>
<spring:message code="missing.key"/>
<span><spring:message code="missing.key"/></span>"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    let expected = concat!(
        "error: \"missing.key\"  missing-code\n",
        "  --> src/main/webapp/WEB-INF/views/sub/page.jsp:2:23\n",
        "  |\n",
        "2 | <spring:message code=\"missing.key\"/>\n",
        "  |                       ^\n",
        "\n",
        "\u{2718} 1 problem (1 error, 0 warnings)\n",
    );
    assert_eq!(output.stdout, expected);
    Ok(())
}

#[test]
fn test_same_code_missing_in_two_files() -> Result<()> {
    let test = CliTest::with_properties("a.b=A\n")?;
    test.write_view("one.jsp", r#"<spring:message code="gone.key"/>"#)?;
    test.write_view("two/two.jsp", r#"<spring:message code="gone.key"/>"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout.matches("\"gone.key\"  missing-code").count(), 2);
    assert!(output.stdout.contains("views/one.jsp:1:23"));
    assert!(output.stdout.contains("views/two/two.jsp:1:23"));
    Ok(())
}

#[test]
fn test_macro_substitution() -> Result<()> {
    let test = CliTest::with_properties("Account.title=Account\n")?;
    test.write_view(
        "account.jsp",
        r#"<c:set var="MACRO" value="Account" />
<h1><spring:message code="${MACRO}.title"/></h1>
<p><spring:message code="${MACRO}.intro"/></p>"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"Account.intro\"  missing-code"));
    assert!(output.stdout.contains("= note: resolved from \"${MACRO}.intro\""));
    assert!(!output.stdout.contains("Account.title"));
    Ok(())
}

#[test]
fn test_undeclared_macro_is_unresolved() -> Result<()> {
    let test = CliTest::with_properties("title=T\n")?;
    test.write_view("page.jsp", r#"<spring:message code="${MACRO}.title"/>"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"${MACRO}.title\"  unresolved-code"));
    assert!(output.stdout.contains("= hint: declare the macro"));
    Ok(())
}

#[test]
fn test_absent_properties_reports_every_code() -> Result<()> {
    let test = CliTest::new()?;
    test.write_view(
        "page.jsp",
        r#"<spring:message code="a.b"/><spring:message code="c.d"/>"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("warning: Cannot load message properties"));
    assert!(output.stdout.contains("error: \"a.b\"  missing-code"));
    assert!(output.stdout.contains("error: \"c.d\"  missing-code"));
    assert!(output.stdout.contains("2 problems (2 errors, 0 warnings)"));
    Ok(())
}

#[test]
fn test_missing_template_root_is_an_error() -> Result<()> {
    let test = CliTest::with_properties("a=b\n")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Template root does not exist"));
    assert_eq!(output.stdout, "");
    Ok(())
}

#[test]
fn test_empty_config_path_is_an_error() -> Result<()> {
    let test = CliTest::with_properties("a=b\n")?;
    test.write_view("page.jsp", "")?;
    test.write_file(".jspcheckrc.json", r#"{ "templateRootPath": "" }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("'templateRootPath' can't be empty"));
    Ok(())
}

#[test]
fn test_config_paths_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".jspcheckrc.json",
        r#"{
         "templateRootPath": "web",
         "messagePropertiesPath": "i18n/messages.properties",
         "ignores": ["legacy/**"]
     }"#,
    )?;
    test.write_file("i18n/messages.properties", "# header=ignored\nok.code=OK\n")?;
    test.write_file("web/page.jsp", r#"<spring:message code="ok.code"/>"#)?;
    test.write_file("web/legacy/old.jsp", r#"<spring:message code="old.code"/>"#)?;
    test.write_file("web/notes.txt", r#"<spring:message code="not.scanned"/>"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 template file against 1 message code"));
    Ok(())
}

#[test]
fn test_cli_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("props/app.properties", "ok.code=OK\n")?;
    test.write_file("pages/page.jsp", r#"<spring:message code="ok.code"/>"#)?;

    let mut cmd = test.check_command();
    cmd.args([
        "--template-root",
        "pages",
        "--message-properties",
        "props/app.properties",
    ]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    Ok(())
}

#[test]
fn test_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/src/main/resources/messages.properties", "x=y\n")?;
    test.write_file(
        "app/src/main/webapp/WEB-INF/views/page.jsp",
        r#"<spring:message code="nope.code"/>"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("--source-root").arg(test.root().join("app"));
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("--> src/main/webapp/WEB-INF/views/page.jsp:1:23")
    );
    Ok(())
}

#[test]
fn test_unreadable_template_is_a_warning() -> Result<()> {
    let test = CliTest::with_properties("a.b=A\n")?;
    test.write_view("good.jsp", r#"<spring:message code="a.b"/>"#)?;
    std::fs::write(
        test.root().join("src/main/webapp/WEB-INF/views/bad.jsp"),
        [0xff, 0xfe, 0x00, 0x80],
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("read-error"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_is_idempotent() -> Result<()> {
    let test = CliTest::with_properties("a.b=A\n")?;
    test.write_view("b.jsp", r#"<spring:message code="b.missing"/>"#)?;
    test.write_view("a/a.jsp", r#"<spring:message code="a.missing"/>"#)?;
    test.write_view("c.jsp", r#"<spring:message code="a.b"/>"#)?;

    let first = run(test.check_command())?;
    let second = run(test.check_command())?;

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        test.read_file("src/main/resources/messages.properties")?,
        "a.b=A\n"
    );
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("check"));
    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_properties("a.b=A\n")?;
    test.write_view("page.jsp", r#"<spring:message code="a.b"/>"#)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stderr
            .contains("note: no .jspcheckrc.json found, using default configuration")
    );
    assert!(
        output
            .stderr
            .contains("note: loaded 1 message code(s) from src/main/resources/messages.properties")
    );
    Ok(())
}

#[test]
fn test_latin1_properties_keep_later_codes() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("src/main/resources"))?;
    std::fs::write(
        test.root().join("src/main/resources/messages.properties"),
        b"a.first=One\ngreeting=Ol\xE9\nz.last=Last\n",
    )?;
    test.write_view("page.jsp", r#"<spring:message code="z.last"/>"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "");
    Ok(())
}
