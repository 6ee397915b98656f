//! Go lint template

pub const GOLANGCI: &str = r#"run:
  timeout: 5m

linters:
  enable:
    - errcheck
    - gosimple
    - govet
    - ineffassign
    - staticcheck
    - unused
    - gofmt
    - goimports

issues:
  exclude-use-default: true
"#;
