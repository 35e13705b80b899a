mod ordering;
mod validator;
