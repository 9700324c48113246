// Test modules for ideaforge crate
//
// Each source file has a corresponding test file that focuses on business
// logic verification. HTTP-level adapter and orchestrator tests live in
// the top-level tests/ directory because they need a wiremock server.
