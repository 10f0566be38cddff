//! Static guidance texts: best-practice guides, troubleshooting guides and
//! the fixed report footers.
//!
//! These are data, not logic — the selection rules live in the tool
//! functions, which match topic keys case-insensitively against the tables
//! below.

/// Best-practice guides keyed by exact lower-cased area string.
pub const BEST_PRACTICE_GUIDES: &[(&str, &str)] = &[
    ("authentication", AUTHENTICATION_BEST_PRACTICES),
    ("data_modeling", DATA_MODELING_BEST_PRACTICES),
    ("deployment", DEPLOYMENT_BEST_PRACTICES),
    ("storage", STORAGE_BEST_PRACTICES),
];

/// Look up a best-practice guide by area. Exact lower-cased key match.
pub fn best_practices_guide(area: &str) -> Option<&'static str> {
    let key = area.to_lowercase();
    BEST_PRACTICE_GUIDES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, guide)| *guide)
}

/// Troubleshooting guides keyed by documentation topic.
pub const TROUBLESHOOTING_GUIDES: &[(&str, &str)] = &[
    ("deployment", DEPLOYMENT_TROUBLESHOOTING),
    ("authentication", AUTHENTICATION_TROUBLESHOOTING),
    ("data", DATA_TROUBLESHOOTING),
    ("storage", STORAGE_TROUBLESHOOTING),
];

/// Look up the troubleshooting guide for a resolved topic.
pub fn troubleshooting_guide(topic: &str) -> Option<&'static str> {
    TROUBLESHOOTING_GUIDES
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, guide)| *guide)
}

/// Fixed footer appended to every documentation search report.
pub const SEARCH_FOOTER: &str = r#"
## Next Steps

1. **Read Documentation:** Click on the documentation URLs above to read the full content
2. **Explore Code:** Visit the repository URLs to see complete implementation examples
3. **Get Content:** Use the read_amplify_documentation tool with specific URLs for full content

**Available Search Topics:**
- Authentication, authorization, sign-in, sign-up, MFA
- Data modeling, GraphQL, API, database, schema
- Storage, file upload, S3, media
- Functions, Lambda, serverless, API
- Deployment, hosting, CI/CD, environments
- AI, machine learning, Bedrock, generation
- Analytics, monitoring, logging
- Push notifications, real-time, subscriptions

**Available Frameworks:** React, Vue, Angular, Next.js, Flutter
"#;

/// Fixed closing section of the template discovery report.
pub const TEMPLATE_GETTING_STARTED: &str = r#"
## Getting Started with Templates

1. **Choose a Framework:** Select the template that matches your preferred frontend framework
2. **Clone the Repository:** Use the git clone command above to get started
3. **Follow Setup Instructions:** Each template includes detailed README instructions
4. **Customize:** Modify the Amplify backend configuration in the `amplify/` directory

## Template Features Comparison

| Framework | Auth | Data/API | Storage | AI/ML | UI Components |
|-----------|------|----------|---------|-------|---------------|"#;

pub const TEMPLATE_FOOTER: &str = r#"

**Legend:** ✅ = Included, 📋 = Available to add

## Next Steps

- **Explore Templates:** Visit the GitHub repositories to see the full code
- **Read Documentation:** Check each template's README for specific setup instructions
- **Get Help:** Use the troubleshooting tool if you encounter issues during setup

**Official Documentation:** https://docs.amplify.aws/
"#;

const AUTHENTICATION_BEST_PRACTICES: &str = r#"
# Amplify Gen2 Authentication Best Practices

1. **Use Social Identity Providers**
   - Implement social login (Google, Facebook, Apple) for better user experience
   - Example:
     ```typescript
     export const auth = defineAuth({
       loginWith: {
         email: true,
         phone: false,
         externalProviders: {
           google: {
             clientId: process.env.GOOGLE_CLIENT_ID,
             scopes: ['profile', 'email', 'openid'],
           },
         },
       },
     });
     ```

2. **Implement Multi-Factor Authentication (MFA)**
   - Enable MFA for sensitive applications
   - Example:
     ```typescript
     export const auth = defineAuth({
       loginWith: {
         email: true,
       },
       multifactor: {
         mode: 'OPTIONAL', // or 'REQUIRED'
         sms: true,
         totp: true,
       },
     });
     ```

3. **Secure User Attributes**
   - Only request necessary user attributes
   - Mark sensitive attributes as required only when necessary
   - Example:
     ```typescript
     export const auth = defineAuth({
       loginWith: {
         email: true,
       },
       userAttributes: {
         given_name: { required: true },
         family_name: { required: true },
         phone_number: { required: false, mutable: true },
       },
     });
     ```

4. **Implement Proper Sign-Out**
   - Always sign out from all devices when handling sensitive data
   - Example:
     ```typescript
     await signOut({ global: true });
     ```
"#;

const DATA_MODELING_BEST_PRACTICES: &str = r#"
# Amplify Gen2 Data Modeling Best Practices

1. **Use Strong Typing**
   - Leverage TypeScript for type safety
   - Example:
     ```typescript
     import { a, defineData } from '@aws-amplify/backend';

     const schema = a.schema({
       Todo: a.model({
         id: a.id(),
         name: a.string().required(),
         priority: a.enum(['LOW', 'MEDIUM', 'HIGH']).required(),
       }),
     });
     ```

2. **Implement Proper Authorization**
   - Use fine-grained access controls
   - Example:
     ```typescript
     const schema = a.schema({
       Todo: a.model({
         id: a.id(),
         name: a.string().required(),
         ownerId: a.string().required(),
       }).authorization((allow) => [
         allow.owner().to(['create', 'read', 'update', 'delete']),
         allow.groups(['TeamMembers']).to(['read', 'update']),
         allow.public().to(['read']),
       ]),
     });
     ```

3. **Use Relationships Effectively**
   - Define clear relationships between models
   - Example:
     ```typescript
     const schema = a.schema({
       Project: a.model({
         id: a.id(),
         name: a.string().required(),
         tasks: a.hasMany('Task'),
       }),
       Task: a.model({
         id: a.id(),
         title: a.string().required(),
         project: a.belongsTo('Project'),
       }),
     });
     ```

4. **Use Indexes for Query Performance**
   - Add indexes for frequently queried fields
   - Example:
     ```typescript
     const schema = a.schema({
       Post: a.model({
         id: a.id(),
         title: a.string().required(),
         category: a.string().required(),
         createdAt: a.datetime().required(),
       }).addIndex('byCategory', {
         sortKey: 'createdAt',
         fields: ['category', 'createdAt'],
       }),
     });
     ```
"#;

const DEPLOYMENT_BEST_PRACTICES: &str = r#"
# Amplify Gen2 Deployment Best Practices

1. **Use Sandbox Environments for Development**
   - Keep a personal cloud sandbox per developer
   - Example:
     ```bash
     npx ampx sandbox
     ```

2. **Deploy Through Branch-Based Environments**
   - Connect git branches to Amplify Hosting so every branch gets its own backend
   - Keep production deploys on a protected branch

3. **Pin Backend Dependencies**
   - Commit an exact `@aws-amplify/backend` version to avoid drift between environments

4. **Validate Before Deploying**
   - Example:
     ```bash
     npx tsc --noEmit
     npx ampx sandbox --once
     ```

5. **Monitor Deployments**
   - Watch the CloudFormation events for a failed stack before retrying
   - Clean up broken sandboxes with `npx ampx sandbox delete`
"#;

const STORAGE_BEST_PRACTICES: &str = r#"
# Amplify Gen2 Storage Best Practices

1. **Scope Access Paths Narrowly**
   - Grant the minimum access each audience needs
   - Example:
     ```typescript
     export const storage = defineStorage({
       name: 'myProjectFiles',
       access: (allow) => ({
         'public/*': [
           allow.authenticated.to(['read', 'write']),
           allow.guest.to(['read']),
         ],
         'private/{entity_id}/*': [
           allow.entity('identity').to(['read', 'write', 'delete']),
         ],
       }),
     });
     ```

2. **Use Entity-Scoped Prefixes for User Data**
   - The `{entity_id}` token isolates each user's files without custom policy code

3. **Set Content Types on Upload**
   - Example:
     ```typescript
     await uploadData({
       key: `uploads/${file.name}`,
       data: file,
       options: { contentType: file.type },
     });
     ```

4. **Serve Downloads Through Signed URLs**
   - Prefer `getUrl` with a short `expiresIn` over proxying file bytes
"#;

const DEPLOYMENT_TROUBLESHOOTING: &str = r#"
# Troubleshooting Amplify Gen2 Deployment Issues

## Common Deployment Problems and Solutions

### 1. Authentication/Credentials Issues
**Symptoms:** Permission denied, invalid credentials, or authentication errors during deployment

**Solutions:**
```bash
# Check your AWS credentials
aws sts get-caller-identity

# Configure AWS CLI if needed
aws configure

# Or use AWS SSO
aws sso login --profile your-profile

# Verify Amplify CLI authentication
npx ampx configure profile
```

### 2. CloudFormation Stack Failures
**Symptoms:** Stack creation/update failures, resource limit errors

**Solutions:**
```bash
# Check stack status
npx ampx status

# View detailed logs
npx ampx logs

# Clean up failed stacks
npx ampx delete
```

### 3. Build Failures
**Symptoms:** Build process fails, dependency errors, TypeScript compilation errors

**Solutions:**
```bash
# Clear node modules and reinstall
rm -rf node_modules package-lock.json
npm install

# Check for TypeScript errors
npx tsc --noEmit
```

### 4. Resource Naming Conflicts
**Symptoms:** Resources already exist errors, naming conflicts

**Solutions:**
- Use unique resource names in your backend configuration
- Check existing AWS resources in your account
- Consider using different AWS regions
- Delete conflicting resources if safe to do so
"#;

const AUTHENTICATION_TROUBLESHOOTING: &str = r#"
# Troubleshooting Amplify Gen2 Authentication Issues

## Common Authentication Problems and Solutions

### 1. Sign-In/Sign-Up Failures
**Symptoms:** Users cannot sign in, sign-up errors, validation failures

**Debug Steps:**
```typescript
import { signIn } from 'aws-amplify/auth';

async function debugSignIn(username: string, password: string) {
  try {
    const result = await signIn({ username, password });
    console.log('Sign-in successful:', result);
    return result;
  } catch (error) {
    console.error('Sign-in error:', {
      name: error.name,
      message: error.message,
    });
    throw error;
  }
}
```

**Common Solutions:**
- Verify user exists and is confirmed in Cognito User Pool
- Check password requirements match your auth configuration
- Ensure email/username format is correct
- Verify user account is not locked or disabled

### 2. Token/Session Issues
**Symptoms:** Unexpected logouts, API authentication failures, token expiration

**Solutions:**
```typescript
import { fetchAuthSession, getCurrentUser } from 'aws-amplify/auth';

const user = await getCurrentUser();
const session = await fetchAuthSession();
console.log('Session valid:', !!session.tokens);
```

### 3. Social Provider Issues
**Symptoms:** Social login fails, redirect problems, OAuth errors

**Solutions:**
- Verify OAuth configuration in the AWS Cognito console
- Check callback URLs match your application URLs
- Ensure social provider app credentials are correct

### 4. Configuration Issues
**Symptoms:** Auth not working after deployment, configuration errors

**Solutions:**
```bash
# Regenerate configuration
npx ampx generate

# Check amplify_outputs.json exists and is valid
cat amplify_outputs.json
```
"#;

const DATA_TROUBLESHOOTING: &str = r#"
# Troubleshooting Amplify Gen2 Data Issues

## Common Data/GraphQL Problems and Solutions

### 1. Schema Validation Errors
**Symptoms:** Schema deployment fails, GraphQL validation errors

**Solutions:**
```typescript
// ❌ Problematic schema
const schema = a.schema({
  Post: a.model({
    title: a.string(),
    // Missing authorization
  }),
});

// ✅ Fixed schema
const schema = a.schema({
  Post: a.model({
    title: a.string().required(),
    content: a.string(),
  }).authorization((allow) => [
    allow.owner(),
    allow.public().to(['read'])
  ]),
});
```

### 2. Client Generation Issues
**Symptoms:** Generated client types are incorrect, compilation errors

**Solutions:**
```bash
# Regenerate client code
npx ampx generate graphql-client-code

# Check TypeScript compilation
npx tsc --noEmit
```

### 3. Authorization Errors
**Symptoms:** Access denied errors, unauthorized operations

**Debug Authorization:**
```typescript
import { generateClient } from 'aws-amplify/data';

const client = generateClient<Schema>();
const result = await client.models.Todo.list();
```

### 4. Performance Issues
**Symptoms:** Slow queries, large response sizes

**Solutions:**
```typescript
// Use pagination
const { data: todos, nextToken } = await client.models.Todo.list({
  limit: 20,
  nextToken: previousNextToken
});

// Use filtering
const { data: completedTodos } = await client.models.Todo.list({
  filter: { completed: { eq: true } }
});
```
"#;

const STORAGE_TROUBLESHOOTING: &str = r#"
# Troubleshooting Amplify Gen2 Storage Issues

## Common Storage Problems and Solutions

### 1. Upload Failures
**Symptoms:** File uploads fail, permission errors, size limit errors

**Debug Upload Issues:**
```typescript
import { uploadData } from 'aws-amplify/storage';

const result = await uploadData({
  key: `uploads/${file.name}`,
  data: file,
  options: {
    contentType: file.type,
    onProgress: ({ transferredBytes, totalBytes }) => {
      console.log(`Upload progress: ${transferredBytes}/${totalBytes}`);
    }
  }
}).result;
```

### 2. Access Permission Issues
**Symptoms:** Access denied errors, unauthorized file operations

**Solutions:**
- Check your storage access rules configuration
- Verify user authentication status
- Ensure file paths match your access patterns

### 3. Download/Access Issues
**Symptoms:** Cannot download files, broken URLs, access errors

**Solutions:**
```typescript
import { getUrl } from 'aws-amplify/storage';

const link = await getUrl({
  key,
  options: { expiresIn: 3600 }
});
```

### 4. Configuration Issues
**Symptoms:** Storage not working after deployment, configuration errors

**Solutions:**
```bash
# Regenerate configuration
npx ampx generate

# Check storage configuration in backend
cat amplify/storage/resource.ts
```
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_practices_lookup_is_case_insensitive() {
        assert!(best_practices_guide("Authentication").is_some());
        assert!(best_practices_guide("DATA_MODELING").is_some());
        assert!(best_practices_guide("quantum_networking").is_none());
    }

    #[test]
    fn troubleshooting_guides_cover_all_mapped_topics() {
        for (_, topic) in crate::consts::ISSUE_TOPIC_MAP {
            assert!(
                troubleshooting_guide(topic).is_some(),
                "missing guide for topic {topic}"
            );
        }
    }

    #[test]
    fn auth_guide_is_distinguishable() {
        let guide = troubleshooting_guide("authentication").unwrap();
        assert!(guide.contains("Sign-In/Sign-Up Failures"));
        assert!(!troubleshooting_guide("deployment").unwrap().contains("Sign-In/Sign-Up Failures"));
    }
}
